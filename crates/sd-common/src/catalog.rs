//! 画面確認用のモックデータ（エンジニア名簿・案件・固定スコア表）

use crate::{Availability, Engineer, Project, Skill};

/// (project_id, engineer_id, score)
pub const BUILTIN_SCORE_ROWS: &[(&str, &str, u8)] = &[
    ("P001", "E001", 95),
    ("P001", "E002", 88),
    ("P001", "E003", 72),
    ("P001", "E004", 85),
    ("P002", "E002", 92),
    ("P002", "E005", 90),
    ("P002", "E006", 78),
    ("P003", "E001", 67),
    ("P003", "E003", 96),
    ("P003", "E007", 81),
    ("P004", "E004", 89),
    ("P004", "E006", 74),
    ("P004", "E008", 93),
];

pub fn engineers() -> Vec<Engineer> {
    vec![
        engineer(
            "E001",
            "佐藤 健太",
            Availability::Available,
            &[
                ("Java", "backend", 8.0),
                ("Spring Boot", "backend", 5.0),
                ("AWS", "infra", 3.0),
            ],
        ),
        engineer(
            "E002",
            "鈴木 美咲",
            Availability::Assigned,
            &[
                ("React", "frontend", 5.0),
                ("TypeScript", "frontend", 5.0),
                ("Next.js", "frontend", 2.0),
            ],
        ),
        engineer(
            "E003",
            "高橋 翔",
            Availability::Available,
            &[
                ("Python", "backend", 6.0),
                ("Django", "backend", 4.0),
                ("PostgreSQL", "database", 6.0),
            ],
        ),
        engineer(
            "E004",
            "田中 優子",
            Availability::Available,
            &[("Go", "backend", 4.0), ("Kubernetes", "infra", 3.0)],
        ),
        engineer(
            "E005",
            "伊藤 大輔",
            Availability::Unavailable,
            &[("Vue.js", "frontend", 3.0), ("PHP", "backend", 7.0)],
        ),
        engineer(
            "E006",
            "渡辺 彩",
            Availability::Available,
            &[("Swift", "mobile", 4.0), ("Kotlin", "mobile", 3.0)],
        ),
        engineer(
            "E007",
            "山本 拓也",
            Availability::Available,
            &[("Rust", "backend", 2.0), ("C++", "backend", 9.0)],
        ),
        engineer(
            "E008",
            "中村 さくら",
            Availability::Assigned,
            &[
                ("Terraform", "infra", 4.0),
                ("AWS", "infra", 6.0),
                ("Python", "backend", 3.0),
            ],
        ),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        project(
            "P001",
            "ECサイトリニューアル",
            "株式会社サンプル商事",
            &["Java", "Spring Boot"],
            &["E002"],
        ),
        project(
            "P002",
            "予約管理アプリ開発",
            "テックフロンティア株式会社",
            &["React", "TypeScript"],
            &[],
        ),
        project(
            "P003",
            "データ分析基盤構築",
            "グローバルデータ株式会社",
            &["Python", "PostgreSQL"],
            &[],
        ),
        project(
            "P004",
            "クラウド移行支援",
            "ネクストクラウド株式会社",
            &["AWS", "Terraform", "Go"],
            &["E008"],
        ),
    ]
}

pub fn find_project<'a>(projects: &'a [Project], project_id: &str) -> Option<&'a Project> {
    projects.iter().find(|project| project.id == project_id)
}

fn engineer(
    id: &str,
    name: &str,
    availability: Availability,
    skills: &[(&str, &str, f32)],
) -> Engineer {
    Engineer {
        id: id.into(),
        name: name.into(),
        skills: skills
            .iter()
            .map(|(skill, category, years)| Skill::new(*skill, *category, *years))
            .collect(),
        availability,
    }
}

fn project(id: &str, name: &str, client: &str, skills: &[&str], assigned: &[&str]) -> Project {
    Project {
        id: id.into(),
        name: name.into(),
        client: client.into(),
        required_skills: skills.iter().map(|s| s.to_string()).collect(),
        assigned_engineer_ids: assigned.iter().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let engineers = engineers();
        let engineer_ids: HashSet<_> = engineers.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(engineer_ids.len(), engineers.len());

        let projects = projects();
        let project_ids: HashSet<_> = projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(project_ids.len(), projects.len());
    }

    #[test]
    fn score_rows_reference_known_ids() {
        let engineer_ids: HashSet<_> = engineers().into_iter().map(|e| e.id).collect();
        let project_ids: HashSet<_> = projects().into_iter().map(|p| p.id).collect();

        for (project_id, engineer_id, _) in BUILTIN_SCORE_ROWS {
            assert!(project_ids.contains(*project_id), "{project_id}");
            assert!(engineer_ids.contains(*engineer_id), "{engineer_id}");
        }
    }

    #[test]
    fn finds_projects_by_id() {
        let projects = projects();
        assert_eq!(
            find_project(&projects, "P003").map(|p| p.name.as_str()),
            Some("データ分析基盤構築")
        );
        assert!(find_project(&projects, "P999").is_none());
    }
}
