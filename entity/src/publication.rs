use sea_orm::entity::prelude::*;

/// A listed medication offer available for request by other hospitals.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "publication")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hospital_id: i32,
    pub medication_id: i32,
    pub quantity: i32,
    pub description: Option<String>,
    pub published: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hospital::Entity",
        from = "Column::HospitalId",
        to = "super::hospital::Column::Id"
    )]
    Hospital,
    #[sea_orm(
        belongs_to = "super::medication::Entity",
        from = "Column::MedicationId",
        to = "super::medication::Column::Id"
    )]
    Medication,
    #[sea_orm(has_many = "super::medication_request::Entity")]
    MedicationRequest,
}

impl Related<super::hospital::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hospital.def()
    }
}

impl Related<super::medication::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Medication.def()
    }
}

impl Related<super::medication_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MedicationRequest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
