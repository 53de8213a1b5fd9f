pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_hospital_table;
mod m20260815_000002_create_app_user_table;
mod m20260815_000003_create_medication_table;
mod m20260815_000004_create_shipment_state_table;
mod m20260815_000005_create_transport_method_table;
mod m20260815_000006_create_logistics_handler_table;
mod m20260815_000007_create_shipment_table;
mod m20260815_000008_create_donation_table;
mod m20260815_000009_create_publication_table;
mod m20260815_000010_create_medication_request_table;
mod m20260815_000011_create_payment_table;
mod m20260815_000012_create_notification_table;
mod m20260815_000013_create_notice_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_hospital_table::Migration),
            Box::new(m20260815_000002_create_app_user_table::Migration),
            Box::new(m20260815_000003_create_medication_table::Migration),
            Box::new(m20260815_000004_create_shipment_state_table::Migration),
            Box::new(m20260815_000005_create_transport_method_table::Migration),
            Box::new(m20260815_000006_create_logistics_handler_table::Migration),
            Box::new(m20260815_000007_create_shipment_table::Migration),
            Box::new(m20260815_000008_create_donation_table::Migration),
            Box::new(m20260815_000009_create_publication_table::Migration),
            Box::new(m20260815_000010_create_medication_request_table::Migration),
            Box::new(m20260815_000011_create_payment_table::Migration),
            Box::new(m20260815_000012_create_notification_table::Migration),
            Box::new(m20260815_000013_create_notice_table::Migration),
        ]
    }
}
