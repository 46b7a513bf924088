//! Column layouts of every exportable entity

use super::{Cell, Column, ReportLayout, Reportable};
use crate::repository::{
    Accidents, Buildings, Complaints, ParkingSpaces, Residents, Users, Violations,
};
use chrono::{DateTime, Utc};
use housing_types::{Building, Complaint, Parking, Resident, TrafficAccident, User, Violation};

fn timestamp(value: &DateTime<Utc>) -> Cell {
    Cell::Text(value.format("%Y-%m-%dT%H:%M:%S").to_string())
}

impl Reportable for Users {
    const LAYOUT: ReportLayout = ReportLayout {
        title: "تقرير المستخدمين",
        file_stem: "users_report",
        columns: &[
            Column::new("الرقم", 20.0),
            Column::new("اسم المستخدم", 40.0),
            Column::new("الاسم الكامل", 50.0),
            Column::new("الدور", 40.0),
            Column::new("تاريخ الإنشاء", 60.0),
        ],
    };

    fn row(u: &User) -> Vec<Cell> {
        vec![
            u.id.into(),
            u.username.as_str().into(),
            u.name.as_str().into(),
            u.role.as_str().into(),
            timestamp(&u.created_at),
        ]
    }
}

impl Reportable for Buildings {
    const LAYOUT: ReportLayout = ReportLayout {
        title: "تقرير المباني",
        file_stem: "buildings_report",
        columns: &[
            Column::new("الرقم", 20.0),
            Column::new("اسم المبنى", 60.0),
            Column::new("النوع", 40.0),
            Column::new("الموقع", 80.0),
            Column::new("عدد الوحدات", 35.0),
        ],
    };

    fn row(b: &Building) -> Vec<Cell> {
        vec![
            b.id.into(),
            b.name.as_str().into(),
            b.kind.as_str().into(),
            b.location.as_str().into(),
            b.units_count.into(),
        ]
    }
}

impl Reportable for Residents {
    const LAYOUT: ReportLayout = ReportLayout {
        title: "تقرير السكان",
        file_stem: "residents_report",
        columns: &[
            Column::new("الرقم", 20.0),
            Column::new("الاسم", 60.0),
            Column::new("رقم الهوية", 45.0),
            Column::new("الهاتف", 40.0),
            Column::new("رقم الوحدة", 35.0),
            Column::new("رقم المبنى", 30.0),
        ],
    };

    fn row(r: &Resident) -> Vec<Cell> {
        vec![
            r.id.into(),
            r.name.as_str().into(),
            r.national_id.clone().into(),
            r.phone.clone().into(),
            r.unit_number.clone().into(),
            r.building_id.into(),
        ]
    }
}

impl Reportable for ParkingSpaces {
    const LAYOUT: ReportLayout = ReportLayout {
        title: "تقرير المواقف",
        file_stem: "parking_report",
        columns: &[
            Column::new("الرقم", 20.0),
            Column::new("رقم الموقف", 50.0),
            Column::new("الحالة", 40.0),
            Column::new("رقم الساكن", 40.0),
            Column::new("رقم المبنى", 40.0),
        ],
    };

    fn row(p: &Parking) -> Vec<Cell> {
        vec![
            p.id.into(),
            p.parking_number.as_str().into(),
            p.status.as_str().into(),
            p.resident_id.into(),
            p.building_id.into(),
        ]
    }
}

impl Reportable for Violations {
    const LAYOUT: ReportLayout = ReportLayout {
        title: "تقرير المخالفات",
        file_stem: "violations_report",
        columns: &[
            Column::new("الرقم", 15.0),
            Column::new("رقم الساكن", 25.0),
            Column::new("نوع المخالفة", 40.0),
            Column::new("الوصف", 80.0),
            Column::new("التاريخ", 45.0),
            Column::new("الحالة", 25.0),
            Column::new("المبلغ", 25.0),
        ],
    };

    fn row(v: &Violation) -> Vec<Cell> {
        vec![
            v.id.into(),
            v.resident_id.into(),
            v.violation_type.as_str().into(),
            v.description.clone().into(),
            timestamp(&v.date),
            v.status.as_str().into(),
            v.amount.into(),
        ]
    }
}

impl Reportable for Complaints {
    const LAYOUT: ReportLayout = ReportLayout {
        title: "تقرير الشكاوى",
        file_stem: "complaints_report",
        columns: &[
            Column::new("الرقم", 14.0),
            Column::new("رقم الساكن", 24.0),
            Column::new("العنوان", 35.0),
            Column::new("الوصف", 54.0),
            Column::new("الفئة", 25.0),
            Column::new("الحالة", 22.0),
            Column::new("الأولوية", 20.0),
            Column::new("تاريخ الإنشاء", 40.0),
            Column::new("تاريخ التحديث", 40.0),
        ],
    };

    fn row(c: &Complaint) -> Vec<Cell> {
        vec![
            c.id.into(),
            c.resident_id.into(),
            c.title.as_str().into(),
            c.description.as_str().into(),
            c.category.clone().into(),
            c.status.as_str().into(),
            c.priority.as_str().into(),
            timestamp(&c.created_at),
            timestamp(&c.updated_at),
        ]
    }
}

impl Reportable for Accidents {
    const LAYOUT: ReportLayout = ReportLayout {
        title: "تقرير الحوادث المرورية",
        file_stem: "accidents_report",
        columns: &[
            Column::new("الرقم", 14.0),
            Column::new("التاريخ", 35.0),
            Column::new("الموقع", 40.0),
            Column::new("اسم المبلغ", 35.0),
            Column::new("هاتف المبلغ", 30.0),
            Column::new("الأطراف المعنية", 34.0),
            Column::new("الخطورة", 22.0),
            Column::new("الوصف", 42.0),
            Column::new("الحالة", 25.0),
        ],
    };

    fn row(a: &TrafficAccident) -> Vec<Cell> {
        vec![
            a.id.into(),
            timestamp(&a.date),
            a.location.as_str().into(),
            a.reporter_name.as_str().into(),
            a.reporter_phone.as_str().into(),
            a.involved_parties.clone().into(),
            a.severity.as_str().into(),
            a.description.as_str().into(),
            a.status.as_str().into(),
        ]
    }
}
