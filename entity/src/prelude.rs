pub use super::app_user::Entity as AppUser;
pub use super::donation::Entity as Donation;
pub use super::hospital::Entity as Hospital;
pub use super::logistics_handler::Entity as LogisticsHandler;
pub use super::medication::Entity as Medication;
pub use super::medication_request::Entity as MedicationRequest;
pub use super::notice::Entity as Notice;
pub use super::notification::Entity as Notification;
pub use super::payment::Entity as Payment;
pub use super::publication::Entity as Publication;
pub use super::shipment::Entity as Shipment;
pub use super::shipment_state::Entity as ShipmentState;
pub use super::transport_method::Entity as TransportMethod;
