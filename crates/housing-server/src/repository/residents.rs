use super::{require_text, Changes, Entity, Messages, SqlValue};
use crate::error::Result;
use chrono::{DateTime, Utc};
use housing_types::{NewResident, Resident, ResidentPatch};

pub struct Residents;

/// Blank national ids are stored as NULL so they don't collide on the
/// unique index.
fn normalize_national_id(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Entity for Residents {
    const TABLE: &'static str = "residents";
    const ROUTE: &'static str = "residents";
    const LABEL: &'static str = "resident";
    const COLUMNS: &'static [&'static str] =
        &["name", "national_id", "phone", "unit_number", "building_id"];
    const MESSAGES: Messages = Messages {
        created: "تم إضافة الساكن بنجاح",
        updated: "تم تحديث الساكن بنجاح",
        deleted: "تم حذف الساكن بنجاح",
    };

    type Record = Resident;
    type View = Resident;
    type Create = NewResident;
    type Update = ResidentPatch;

    fn id(record: &Resident) -> i64 {
        record.id
    }

    fn build(input: NewResident, _now: DateTime<Utc>) -> Result<Vec<SqlValue>> {
        require_text("name", &input.name)?;

        Ok(vec![
            input.name.into(),
            normalize_national_id(input.national_id).into(),
            input.phone.into(),
            input.unit_number.into(),
            input.building_id.into(),
        ])
    }

    fn changes(patch: ResidentPatch, _now: DateTime<Utc>) -> Result<Changes> {
        Ok(Changes::new()
            .set_text("name", patch.name)?
            .set("national_id", patch.national_id.map(normalize_national_id))
            .set("phone", patch.phone)
            .set("unit_number", patch.unit_number)
            .set("building_id", patch.building_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_national_id_becomes_null() {
        assert_eq!(normalize_national_id(Some("   ".to_string())), None);
        assert_eq!(
            normalize_national_id(Some(" 1029 ".to_string())),
            Some("1029".to_string())
        );
        assert_eq!(normalize_national_id(None), None);
    }
}
