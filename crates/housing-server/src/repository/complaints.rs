use super::{require_text, Changes, Entity, Messages, SqlValue};
use crate::error::Result;
use chrono::{DateTime, Utc};
use housing_types::{status, Complaint, ComplaintPatch, NewComplaint};

pub struct Complaints;

impl Entity for Complaints {
    const TABLE: &'static str = "complaints";
    const ROUTE: &'static str = "complaints";
    const LABEL: &'static str = "complaint";
    const COLUMNS: &'static [&'static str] = &[
        "resident_id",
        "title",
        "description",
        "category",
        "status",
        "priority",
        "created_at",
        "updated_at",
    ];
    const STATUS_COLUMN: Option<&'static str> = Some("status");
    const MESSAGES: Messages = Messages {
        created: "تم تسجيل الشكوى بنجاح",
        updated: "تم تحديث الشكوى بنجاح",
        deleted: "تم حذف الشكوى بنجاح",
    };

    type Record = Complaint;
    type View = Complaint;
    type Create = NewComplaint;
    type Update = ComplaintPatch;

    fn id(record: &Complaint) -> i64 {
        record.id
    }

    fn build(input: NewComplaint, now: DateTime<Utc>) -> Result<Vec<SqlValue>> {
        require_text("title", &input.title)?;
        require_text("description", &input.description)?;
        let status = input.status.unwrap_or_else(|| status::PENDING.to_string());
        require_text("status", &status)?;

        Ok(vec![
            input.resident_id.into(),
            input.title.into(),
            input.description.into(),
            input.category.into(),
            status.into(),
            input.priority.to_string().into(),
            now.into(),
            now.into(),
        ])
    }

    /// Every successful update refreshes `updated_at`
    fn changes(patch: ComplaintPatch, now: DateTime<Utc>) -> Result<Changes> {
        Ok(Changes::new()
            .set("resident_id", patch.resident_id)
            .set_text("title", patch.title)?
            .set_text("description", patch.description)?
            .set("category", patch.category)
            .set_text("status", patch.status)?
            .set("priority", patch.priority.map(|p| p.to_string()))
            .set("updated_at", Some(now)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use housing_types::Priority;

    #[test]
    fn update_touches_supplied_fields_and_updated_at() {
        let now = Utc::now();
        let changes = Complaints::changes(
            ComplaintPatch {
                status: Some(status::RESOLVED.to_string()),
                ..Default::default()
            },
            now,
        )
        .unwrap();

        assert_eq!(changes.columns(), ["status", "updated_at"]);
        assert_eq!(changes.get("updated_at"), Some(&SqlValue::Timestamp(now)));
        assert_eq!(changes.get("created_at"), None);
    }

    #[test]
    fn priority_patch_is_stored_lowercase() {
        let changes = Complaints::changes(
            ComplaintPatch {
                priority: Some(Priority::High),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(
            changes.get("priority"),
            Some(&SqlValue::Text(Some("high".to_string())))
        );
    }

    #[test]
    fn blank_title_is_rejected() {
        let result = Complaints::changes(
            ComplaintPatch {
                title: Some("  ".to_string()),
                ..Default::default()
            },
            Utc::now(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn cleared_category_is_written_as_null() {
        let changes = Complaints::changes(
            ComplaintPatch {
                category: Some(None),
                ..Default::default()
            },
            Utc::now(),
        )
        .unwrap();
        assert_eq!(changes.get("category"), Some(&SqlValue::Text(None)));
    }
}
