use super::{require_text, Changes, Entity, Messages, SqlValue};
use crate::error::Result;
use chrono::{DateTime, Utc};
use housing_types::{status, NewTrafficAccident, TrafficAccident, TrafficAccidentPatch};

pub struct Accidents;

impl Entity for Accidents {
    const TABLE: &'static str = "traffic_accidents";
    const ROUTE: &'static str = "accidents";
    const LABEL: &'static str = "accident";
    const COLUMNS: &'static [&'static str] = &[
        "date",
        "location",
        "reporter_name",
        "reporter_phone",
        "involved_parties",
        "severity",
        "description",
        "status",
        "created_at",
    ];
    const STATUS_COLUMN: Option<&'static str> = Some("status");
    const ORDER_BY: &'static str = "date DESC, id DESC";
    const MESSAGES: Messages = Messages {
        created: "تم تسجيل الحادث بنجاح",
        updated: "تم تحديث الحادث بنجاح",
        deleted: "تم حذف الحادث بنجاح",
    };

    type Record = TrafficAccident;
    type View = TrafficAccident;
    type Create = NewTrafficAccident;
    type Update = TrafficAccidentPatch;

    fn id(record: &TrafficAccident) -> i64 {
        record.id
    }

    fn build(input: NewTrafficAccident, now: DateTime<Utc>) -> Result<Vec<SqlValue>> {
        require_text("location", &input.location)?;
        require_text("reporter_name", &input.reporter_name)?;
        require_text("reporter_phone", &input.reporter_phone)?;
        require_text("severity", &input.severity)?;
        require_text("description", &input.description)?;
        let status = input
            .status
            .unwrap_or_else(|| status::INVESTIGATING.to_string());
        require_text("status", &status)?;

        Ok(vec![
            input.date.into(),
            input.location.into(),
            input.reporter_name.into(),
            input.reporter_phone.into(),
            input.involved_parties.into(),
            input.severity.into(),
            input.description.into(),
            status.into(),
            now.into(),
        ])
    }

    fn changes(patch: TrafficAccidentPatch, _now: DateTime<Utc>) -> Result<Changes> {
        Ok(Changes::new()
            .set("date", patch.date)
            .set_text("location", patch.location)?
            .set_text("reporter_name", patch.reporter_name)?
            .set_text("reporter_phone", patch.reporter_phone)?
            .set("involved_parties", patch.involved_parties)
            .set_text("severity", patch.severity)?
            .set_text("description", patch.description)?
            .set_text("status", patch.status)?)
    }
}
