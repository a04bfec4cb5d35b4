use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // Default option catalogue. Operators maintain these rows afterwards;
        // ON CONFLICT keeps re-running migrations from clobbering edits.
        db.execute_unprepared(
            r#"
            INSERT INTO cake_options (option_type, option_name, base_price) VALUES
                ('weight', '0.5', 0),
                ('weight', '1', 0),
                ('weight', '1.5', 0),
                ('weight', '2', 0),
                ('weight', '3', 0),
                ('weight', '4', 0),
                ('weight', '5', 0),
                ('icing', 'Whipped Cream', 0),
                ('icing', 'Butter Cream', 0),
                ('icing', 'Fondant', 0),
                ('icing', 'Semi-Fondant', 0),
                ('flavor', 'Vanilla', 500),
                ('flavor', 'Pineapple', 500),
                ('flavor', 'Chocolate', 550),
                ('flavor', 'Butterscotch', 550),
                ('flavor', 'Black Forest', 600),
                ('flavor', 'Blueberry', 650),
                ('flavor', 'Red Velvet', 700),
                ('cake_type', 'Pastry', 0),
                ('cake_type', 'Regular Cake', 0),
                ('cake_type', 'Doll Cake', 300),
                ('cake_type', 'Step Cake / Tier Cake', 500),
                ('shape', 'Round', 0),
                ('shape', 'Square', 50),
                ('shape', 'Rectangle', 50),
                ('shape', 'Heart', 100),
                ('shape', 'Number / Alphabet', 250),
                ('shape', 'Custom Shape', 200),
                ('toy', 'Edible Toys', 40),
                ('toy', 'Non-Edible Toys', 60),
                ('flower', 'General Flower', 50)
            ON CONFLICT (option_type, option_name) DO NOTHING;
            "#,
        )
        .await?;

        // Current pricing revision encodes icing surcharges as per-kg rules.
        // Loading the banded rule names (Fondant_1_1.5kg, ...) instead would
        // switch the engine to the legacy weight-banded mode.
        db.execute_unprepared(
            r#"
            INSERT INTO extra_pricing_rules (rule_name, price) VALUES
                ('Eggless', 100),
                ('Photo Cake', 250),
                ('Fondant_per_kg', 700),
                ('Semi-Fondant_per_kg', 500)
            ON CONFLICT (rule_name) DO NOTHING;
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            "DELETE FROM extra_pricing_rules WHERE rule_name IN ('Eggless', 'Photo Cake', 'Fondant_per_kg', 'Semi-Fondant_per_kg');",
        )
        .await?;

        db.execute_unprepared("DELETE FROM cake_options;").await?;

        Ok(())
    }
}
