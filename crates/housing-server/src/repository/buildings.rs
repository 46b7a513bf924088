use super::{require_non_negative_int, require_text, Changes, Entity, Messages, SqlValue};
use crate::error::Result;
use chrono::{DateTime, Utc};
use housing_types::{Building, BuildingPatch, NewBuilding};

pub struct Buildings;

impl Entity for Buildings {
    const TABLE: &'static str = "buildings";
    const ROUTE: &'static str = "buildings";
    const LABEL: &'static str = "building";
    const COLUMNS: &'static [&'static str] = &["name", "type", "location", "units_count"];
    const MESSAGES: Messages = Messages {
        created: "تم إضافة المبنى بنجاح",
        updated: "تم تحديث المبنى بنجاح",
        deleted: "تم حذف المبنى بنجاح",
    };

    type Record = Building;
    type View = Building;
    type Create = NewBuilding;
    type Update = BuildingPatch;

    fn id(record: &Building) -> i64 {
        record.id
    }

    fn build(input: NewBuilding, _now: DateTime<Utc>) -> Result<Vec<SqlValue>> {
        require_text("name", &input.name)?;
        require_text("type", &input.kind)?;
        require_text("location", &input.location)?;
        require_non_negative_int("units_count", input.units_count)?;

        Ok(vec![
            input.name.into(),
            input.kind.into(),
            input.location.into(),
            input.units_count.into(),
        ])
    }

    fn changes(patch: BuildingPatch, _now: DateTime<Utc>) -> Result<Changes> {
        if let Some(units) = patch.units_count {
            require_non_negative_int("units_count", units)?;
        }
        Ok(Changes::new()
            .set_text("name", patch.name)?
            .set_text("type", patch.kind)?
            .set_text("location", patch.location)?
            .set("units_count", patch.units_count))
    }
}
