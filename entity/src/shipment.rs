use sea_orm::entity::prelude::*;

/// A logistics record moving a donation from the donor hospital to its
/// destination. Created exactly once per donation; `shipment_state_id`
/// only ever moves forward through the state catalog.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub transport_method_id: i32,
    pub shipment_state_id: i32,
    pub pickup_date: Date,
    pub estimated_delivery_date: Date,
    pub logistics_handler_id: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::transport_method::Entity",
        from = "Column::TransportMethodId",
        to = "super::transport_method::Column::Id"
    )]
    TransportMethod,
    #[sea_orm(
        belongs_to = "super::shipment_state::Entity",
        from = "Column::ShipmentStateId",
        to = "super::shipment_state::Column::Id"
    )]
    ShipmentState,
    #[sea_orm(
        belongs_to = "super::logistics_handler::Entity",
        from = "Column::LogisticsHandlerId",
        to = "super::logistics_handler::Column::Id",
        on_delete = "Restrict"
    )]
    LogisticsHandler,
    #[sea_orm(has_one = "super::donation::Entity")]
    Donation,
}

impl Related<super::transport_method::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TransportMethod.def()
    }
}

impl Related<super::shipment_state::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShipmentState.def()
    }
}

impl Related<super::logistics_handler::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LogisticsHandler.def()
    }
}

impl Related<super::donation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Donation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
