use super::{require_non_negative, require_text, Changes, Entity, Messages, SqlValue};
use crate::error::Result;
use chrono::{DateTime, Utc};
use housing_types::{status, NewViolation, Violation, ViolationPatch};

pub struct Violations;

impl Entity for Violations {
    const TABLE: &'static str = "violations";
    const ROUTE: &'static str = "violations";
    const LABEL: &'static str = "violation";
    const COLUMNS: &'static [&'static str] = &[
        "resident_id",
        "violation_type",
        "description",
        "date",
        "status",
        "amount",
    ];
    const STATUS_COLUMN: Option<&'static str> = Some("status");
    const MESSAGES: Messages = Messages {
        created: "تم تسجيل المخالفة بنجاح",
        updated: "تم تحديث المخالفة بنجاح",
        deleted: "تم حذف المخالفة بنجاح",
    };

    type Record = Violation;
    type View = Violation;
    type Create = NewViolation;
    type Update = ViolationPatch;

    fn id(record: &Violation) -> i64 {
        record.id
    }

    fn build(input: NewViolation, now: DateTime<Utc>) -> Result<Vec<SqlValue>> {
        require_text("violation_type", &input.violation_type)?;
        require_non_negative("amount", input.amount)?;
        let status = input.status.unwrap_or_else(|| status::OPEN.to_string());
        require_text("status", &status)?;

        Ok(vec![
            input.resident_id.into(),
            input.violation_type.into(),
            input.description.into(),
            input.date.unwrap_or(now).into(),
            status.into(),
            input.amount.into(),
        ])
    }

    fn changes(patch: ViolationPatch, _now: DateTime<Utc>) -> Result<Changes> {
        if let Some(amount) = patch.amount {
            require_non_negative("amount", amount)?;
        }
        Ok(Changes::new()
            .set("resident_id", patch.resident_id)
            .set_text("violation_type", patch.violation_type)?
            .set("description", patch.description)
            .set("date", patch.date)
            .set_text("status", patch.status)?
            .set("amount", patch.amount))
    }
}
