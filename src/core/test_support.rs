//! 单元测试共用的小型课程目录

use crate::core::catalog::Catalog;
use crate::core::models::{EnrollmentRecord, EnrollmentStatus};

const SAMPLE_CATALOG: &str = r#"{
  "requirements": {
    "total_credits": 20,
    "categories": [
      { "name": "人文科学", "min_credits": 2, "kind": "humanities", "subcategories": [{ "name": "人文科学" }] },
      { "name": "社会科学", "min_credits": 2, "kind": "social_science", "subcategories": [{ "name": "社会科学" }] },
      { "name": "自然科学", "min_credits": 2, "kind": "natural_science", "subcategories": [{ "name": "自然科学" }] },
      {
        "name": "外国语", "min_credits": 2, "kind": "language",
        "subcategories": [
          { "name": "外语A", "track": "track_a" },
          { "name": "外语B", "track": "track_b" },
          { "name": "外语概论" }
        ]
      },
      {
        "name": "日语（留学生）", "min_credits": 2, "track": "track_b",
        "subcategories": [{ "name": "日语基础" }]
      },
      { "name": "健康体育", "min_credits": 1, "kind": "health_sports", "subcategories": [{ "name": "健康体育" }] },
      { "name": "职业设计", "min_credits": 2, "kind": "career_design", "subcategories": [{ "name": "职业设计" }] },
      { "name": "信息媒体", "min_credits": 2, "kind": "information_media", "subcategories": [{ "name": "信息媒体" }] },
      {
        "name": "专业教育", "min_credits": 4, "required_credits": 6,
        "subcategories": [
          { "name": "专业必修", "min_credits": 4, "required_credits": 4 },
          { "name": "专业选修" }
        ]
      }
    ]
  },
  "courses": [
    { "id": "HUM101", "credits": 2, "category": "人文科学" },
    { "id": "HUM102", "credits": 2, "category": "人文科学" },
    { "id": "SOC101", "credits": 2, "category": "社会科学" },
    { "id": "SOC102", "credits": 2, "category": "社会科学" },
    { "id": "NAT101", "credits": 2, "category": "自然科学" },
    { "id": "NAT102", "credits": 2, "category": "自然科学" },
    { "id": "ENG101", "credits": 2, "category": "外国语/外语A", "required": true },
    { "id": "ENG102", "credits": 2, "category": "外国语/外语A" },
    { "id": "JPN101", "credits": 2, "category": "外国语/外语B", "required": true },
    { "id": "JPN102", "credits": 2, "category": "外国语/外语B" },
    { "id": "LAN100", "credits": 2, "category": "外国语/外语概论" },
    { "id": "JPN110", "credits": 2, "category": "日语（留学生）/日语基础" },
    { "id": "PE101", "credits": 1, "category": "健康体育" },
    { "id": "PE102", "credits": 1, "category": "健康体育" },
    { "id": "CAR101", "credits": 2, "category": "职业设计", "required": true },
    { "id": "CAR102", "credits": 2, "category": "职业设计" },
    { "id": "INF101", "credits": 2, "category": "信息媒体", "required": true },
    { "id": "INF102", "credits": 2, "category": "信息媒体" },
    { "id": "MAJ101", "credits": 2, "category": "专业教育/专业必修", "required": true },
    { "id": "MAJ102", "credits": 2, "category": "专业教育/专业必修", "required": true },
    { "id": "ELE201", "credits": 2, "category": "专业教育/专业选修" },
    { "id": "ELE202", "credits": 2, "category": "专业教育/专业选修" },
    { "id": "ELE203", "credits": 2, "category": "专业教育/专业选修" },
    { "id": "ELE204", "credits": 2, "category": "专业教育/专业选修" },
    { "id": "FREE100", "credits": 2, "category": "自由选修" }
  ]
}"#;

pub(crate) fn sample_catalog() -> Catalog {
    Catalog::from_json(SAMPLE_CATALOG).unwrap()
}

pub(crate) fn completed(id: &str) -> EnrollmentRecord {
    EnrollmentRecord::new(id, EnrollmentStatus::Completed)
}

pub(crate) fn planned(id: &str) -> EnrollmentRecord {
    EnrollmentRecord::new(id, EnrollmentStatus::Planned)
}

pub(crate) fn in_progress(id: &str) -> EnrollmentRecord {
    EnrollmentRecord::new(id, EnrollmentStatus::InProgress)
}

/// 覆盖所有要求的母语者修读记录（共21学分）
pub(crate) fn graduating_native() -> Vec<EnrollmentRecord> {
    [
        "HUM101", "HUM102", "SOC101", "NAT101", "ENG101", "PE101", "CAR101", "INF101", "MAJ101",
        "MAJ102", "ELE201",
    ]
    .iter()
    .map(|id| completed(id))
    .collect()
}

/// 单门课程学分接近 u32 上限的目录
pub(crate) fn large_credit_catalog() -> Catalog {
    Catalog::from_json(
        r#"{
          "requirements": {
            "total_credits": 10,
            "categories": [
              { "name": "专业教育", "min_credits": 4, "subcategories": [{ "name": "专业选修" }] }
            ]
          },
          "courses": [
            { "id": "BIG100", "credits": 3000000000, "category": "专业选修" }
          ]
        }"#,
    )
    .unwrap()
}
