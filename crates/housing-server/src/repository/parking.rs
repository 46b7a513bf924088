use super::{require_text, Changes, Entity, Messages, SqlValue};
use crate::error::Result;
use chrono::{DateTime, Utc};
use housing_types::{status, NewParking, Parking, ParkingPatch};

pub struct ParkingSpaces;

impl Entity for ParkingSpaces {
    const TABLE: &'static str = "parking";
    const ROUTE: &'static str = "parking";
    const LABEL: &'static str = "parking space";
    const COLUMNS: &'static [&'static str] =
        &["parking_number", "status", "resident_id", "building_id"];
    const STATUS_COLUMN: Option<&'static str> = Some("status");
    const MESSAGES: Messages = Messages {
        created: "تم إضافة الموقف بنجاح",
        updated: "تم تحديث الموقف بنجاح",
        deleted: "تم حذف الموقف بنجاح",
    };

    type Record = Parking;
    type View = Parking;
    type Create = NewParking;
    type Update = ParkingPatch;

    fn id(record: &Parking) -> i64 {
        record.id
    }

    fn build(input: NewParking, _now: DateTime<Utc>) -> Result<Vec<SqlValue>> {
        require_text("parking_number", &input.parking_number)?;
        let status = input
            .status
            .unwrap_or_else(|| status::AVAILABLE.to_string());
        require_text("status", &status)?;

        Ok(vec![
            input.parking_number.into(),
            status.into(),
            input.resident_id.into(),
            input.building_id.into(),
        ])
    }

    fn changes(patch: ParkingPatch, _now: DateTime<Utc>) -> Result<Changes> {
        Ok(Changes::new()
            .set_text("parking_number", patch.parking_number)?
            .set_text("status", patch.status)?
            .set("resident_id", patch.resident_id)
            .set("building_id", patch.building_id))
    }
}
