use serde::{Deserialize, Serialize};

use crate::error::{DeskError, DeskResult};
use crate::{Availability, Engineer};

const MAX_LIMIT: usize = 200;
const MAX_OFFSET: usize = 10_000;
const DEFAULT_LIMIT: usize = 20;

/// 一覧画面の検索条件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterQuery {
    /// 名前・ID・スキル名の部分一致（大文字小文字は無視）
    pub keyword: Option<String>,
    pub skill_category: Option<String>,
    pub availability: Option<Availability>,
    pub limit: usize,
    pub offset: usize,
}

impl Default for RosterQuery {
    fn default() -> Self {
        Self {
            keyword: None,
            skill_category: None,
            availability: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPage {
    pub items: Vec<Engineer>,
    /// フィルタ後の総件数（ページング前）
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

pub fn validate_pagination(limit: usize, offset: usize) -> DeskResult<(usize, usize)> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(DeskError::InvalidArgument(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    if offset > MAX_OFFSET {
        return Err(DeskError::InvalidArgument(format!(
            "offset must be between 0 and {MAX_OFFSET}"
        )));
    }

    Ok((limit, offset))
}

fn matches_query(engineer: &Engineer, keyword: Option<&str>, query: &RosterQuery) -> bool {
    if let Some(keyword) = keyword {
        let hit = engineer.name.to_lowercase().contains(keyword)
            || engineer.id.to_lowercase().contains(keyword)
            || engineer
                .skills
                .iter()
                .any(|skill| skill.name.to_lowercase().contains(keyword));
        if !hit {
            return false;
        }
    }

    if let Some(category) = query.skill_category.as_deref() {
        if !engineer
            .skills
            .iter()
            .any(|skill| skill.category.eq_ignore_ascii_case(category))
        {
            return false;
        }
    }

    query
        .availability
        .map_or(true, |availability| engineer.availability == availability)
}

/// 名簿をフィルタしてページを切り出す（名簿の並び順を保持）
pub fn query_roster(roster: &[Engineer], query: &RosterQuery) -> DeskResult<RosterPage> {
    let (limit, offset) = validate_pagination(query.limit, query.offset)?;

    let keyword = query
        .keyword
        .as_deref()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty());

    let filtered: Vec<&Engineer> = roster
        .iter()
        .filter(|engineer| matches_query(engineer, keyword.as_deref(), query))
        .collect();

    Ok(RosterPage {
        total: filtered.len(),
        items: filtered.into_iter().skip(offset).take(limit).cloned().collect(),
        limit,
        offset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Skill;

    fn roster() -> Vec<Engineer> {
        let mut assigned = Engineer::new("E002", "鈴木 花子")
            .with_skill(Skill::new("React", "frontend", 4.0));
        assigned.availability = Availability::Assigned;

        vec![
            Engineer::new("E001", "佐藤 太郎").with_skill(Skill::new("Rust", "backend", 3.0)),
            assigned,
            Engineer::new("E003", "田中 一郎")
                .with_skill(Skill::new("TypeScript", "frontend", 5.0))
                .with_skill(Skill::new("Go", "backend", 2.0)),
        ]
    }

    fn ids(page: &RosterPage) -> Vec<&str> {
        page.items.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn filters_by_keyword_case_insensitively() {
        let query = RosterQuery {
            keyword: Some("  rust ".into()),
            ..RosterQuery::default()
        };
        let page = query_roster(&roster(), &query).unwrap();
        assert_eq!(ids(&page), vec!["E001"]);
        assert_eq!(page.total, 1);
    }

    #[test]
    fn filters_by_category_and_availability() {
        let query = RosterQuery {
            skill_category: Some("Frontend".into()),
            availability: Some(Availability::Available),
            ..RosterQuery::default()
        };
        let page = query_roster(&roster(), &query).unwrap();
        assert_eq!(ids(&page), vec!["E003"]);
    }

    #[test]
    fn paginates_after_filtering() {
        let query = RosterQuery {
            limit: 1,
            offset: 1,
            ..RosterQuery::default()
        };
        let page = query_roster(&roster(), &query).unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(ids(&page), vec!["E002"]);

        let past_end = RosterQuery {
            offset: 10,
            ..RosterQuery::default()
        };
        assert!(query_roster(&roster(), &past_end).unwrap().items.is_empty());
    }

    #[test]
    fn enforces_pagination_bounds() {
        assert!(validate_pagination(0, 0).is_err());
        assert!(validate_pagination(201, 0).is_err());
        assert!(validate_pagination(10, 10_001).is_err());
        assert_eq!(validate_pagination(200, 10_000).unwrap(), (200, 10_000));
    }
}
