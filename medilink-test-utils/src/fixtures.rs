//! Row fixtures for tests.
//!
//! Every method inserts a row with standard test values and returns the
//! persisted model. Callers are responsible for creating the tables the
//! fixture touches (see `test_setup_with_tables!`).

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, setup::TestSetup};

/// Low bcrypt cost to keep test runs fast.
const TEST_BCRYPT_COST: u32 = 4;

/// Plaintext password every fixture user is created with.
pub static TEST_PASSWORD: &str = "contrasena-segura";

impl TestSetup {
    pub async fn insert_hospital(&self) -> Result<entity::hospital::Model, TestError> {
        let hospital = entity::hospital::ActiveModel {
            name: ActiveValue::Set("Hospital General".to_string()),
            address: ActiveValue::Set("Av. Central 1".to_string()),
            city: ActiveValue::Set("Tegucigalpa".to_string()),
            phone: ActiveValue::Set("555-0000".to_string()),
            email: ActiveValue::Set("contacto@hospital.example".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(hospital.insert(&self.db).await?)
    }

    /// Inserts a user with [`TEST_PASSWORD`] hashed at a low cost.
    pub async fn insert_user(&self, email: &str) -> Result<entity::app_user::Model, TestError> {
        let password_hash = bcrypt::hash(TEST_PASSWORD, TEST_BCRYPT_COST)?;

        let user = entity::app_user::ActiveModel {
            hospital_id: ActiveValue::Set(None),
            name: ActiveValue::Set("Usuario de Prueba".to_string()),
            email: ActiveValue::Set(email.to_string()),
            password_hash: ActiveValue::Set(password_hash),
            role: ActiveValue::Set("hospital".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.db).await?)
    }

    pub async fn insert_handler(
        &self,
        hospital_id: i32,
    ) -> Result<entity::logistics_handler::Model, TestError> {
        let handler = entity::logistics_handler::ActiveModel {
            hospital_id: ActiveValue::Set(hospital_id),
            name: ActiveValue::Set("Carlos Paz".to_string()),
            phone: ActiveValue::Set("555-0123".to_string()),
            email: ActiveValue::Set("carlos@logistica.example".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(handler.insert(&self.db).await?)
    }

    /// Seeds the shipment state catalog the way migrations do, in
    /// lifecycle order: packing, in transit, delivered.
    pub async fn seed_shipment_states(
        &self,
    ) -> Result<Vec<entity::shipment_state::Model>, TestError> {
        let mut states = Vec::new();

        for name in ["Empaquetando", "En camino", "Entregado"] {
            let state = entity::shipment_state::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            };

            states.push(state.insert(&self.db).await?);
        }

        Ok(states)
    }

    pub async fn insert_transport_method(
        &self,
    ) -> Result<entity::transport_method::Model, TestError> {
        use std::sync::atomic::{AtomicU32, Ordering};

        // Names are unique; number them so one test can insert several.
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);

        let method = entity::transport_method::ActiveModel {
            name: ActiveValue::Set(format!("Terrestre-{}", n)),
            ..Default::default()
        };

        Ok(method.insert(&self.db).await?)
    }

    /// Inserts a shipment in the given state, creating a transport method
    /// for it on the fly.
    pub async fn insert_shipment(
        &self,
        shipment_state_id: i32,
        logistics_handler_id: Option<i32>,
    ) -> Result<entity::shipment::Model, TestError> {
        let method = self.insert_transport_method().await?;
        let today = Utc::now().date_naive();

        let shipment = entity::shipment::ActiveModel {
            transport_method_id: ActiveValue::Set(method.id),
            shipment_state_id: ActiveValue::Set(shipment_state_id),
            pickup_date: ActiveValue::Set(today),
            estimated_delivery_date: ActiveValue::Set(today),
            logistics_handler_id: ActiveValue::Set(logistics_handler_id),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(shipment.insert(&self.db).await?)
    }

    pub async fn insert_donation(
        &self,
        hospital_id: i32,
    ) -> Result<entity::donation::Model, TestError> {
        let donation = entity::donation::ActiveModel {
            hospital_id: ActiveValue::Set(hospital_id),
            shipment_id: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(donation.insert(&self.db).await?)
    }

    pub async fn insert_notification(
        &self,
        user_id: i32,
    ) -> Result<entity::notification::Model, TestError> {
        let notification = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            message: ActiveValue::Set("Su donación fue registrada".to_string()),
            read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(notification.insert(&self.db).await?)
    }

    pub async fn insert_medication(&self) -> Result<entity::medication::Model, TestError> {
        let medication = entity::medication::ActiveModel {
            name: ActiveValue::Set("Amoxicilina 500mg".to_string()),
            description: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(medication.insert(&self.db).await?)
    }

    pub async fn insert_publication(
        &self,
        hospital_id: i32,
        medication_id: i32,
    ) -> Result<entity::publication::Model, TestError> {
        let publication = entity::publication::ActiveModel {
            hospital_id: ActiveValue::Set(hospital_id),
            medication_id: ActiveValue::Set(medication_id),
            quantity: ActiveValue::Set(10),
            description: ActiveValue::Set(None),
            published: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(publication.insert(&self.db).await?)
    }

    pub async fn insert_request(
        &self,
        publication_id: i32,
        hospital_id: i32,
    ) -> Result<entity::medication_request::Model, TestError> {
        let request = entity::medication_request::ActiveModel {
            publication_id: ActiveValue::Set(publication_id),
            hospital_id: ActiveValue::Set(hospital_id),
            quantity: ActiveValue::Set(1),
            status: ActiveValue::Set("Pendiente".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(request.insert(&self.db).await?)
    }

    pub async fn insert_payment(
        &self,
        hospital_id: i32,
        amount: f64,
        status: &str,
    ) -> Result<entity::payment::Model, TestError> {
        let payment = entity::payment::ActiveModel {
            hospital_id: ActiveValue::Set(hospital_id),
            amount: ActiveValue::Set(amount),
            status: ActiveValue::Set(status.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(payment.insert(&self.db).await?)
    }
}
