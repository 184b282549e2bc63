//! Talk resource transformer.
//!
//! A talk is rendered through its current revision: the revision supplies
//! the content attributes, the talk supplies identity and timestamps.

use std::collections::HashMap;

use serde::Serialize;
use symposium_core::revision::current_revision;
use symposium_core::types::{DbId, Timestamp};
use symposium_db::models::talk::Talk;
use symposium_db::models::talk_revision::TalkRevision;

/// Resource type tag for talks.
pub const TALK_RESOURCE_TYPE: &str = "talks";

#[derive(Debug, Clone, Serialize)]
pub struct TalkResource {
    pub id: DbId,
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub attributes: TalkAttributes,
}

#[derive(Debug, Clone, Serialize)]
pub struct TalkAttributes {
    pub title: String,
    #[serde(rename = "type")]
    pub talk_type: Option<String>,
    pub length: Option<String>,
    pub level: Option<String>,
    pub description: Option<String>,
    pub slides: Option<String>,
    pub organizer_notes: Option<String>,
    pub current_revision_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TalkResource {
    pub fn new(talk: &Talk, current: &TalkRevision) -> Self {
        Self {
            id: talk.id,
            resource_type: TALK_RESOURCE_TYPE,
            attributes: TalkAttributes {
                title: current.title.clone(),
                talk_type: current.talk_type.clone(),
                length: current.length.clone(),
                level: current.level.clone(),
                description: current.description.clone(),
                slides: current.slides.clone(),
                organizer_notes: current.organizer_notes.clone(),
                current_revision_id: current.id,
                created_at: talk.created_at,
                updated_at: talk.updated_at,
            },
        }
    }
}

/// Render every talk through its current revision.
///
/// `revisions` may hold revisions of any of the talks, in any order. Talks
/// without a revision are skipped.
pub fn build_talk_resources(talks: &[Talk], revisions: Vec<TalkRevision>) -> Vec<TalkResource> {
    let mut by_talk: HashMap<DbId, Vec<TalkRevision>> = HashMap::new();
    for revision in revisions {
        by_talk.entry(revision.talk_id).or_default().push(revision);
    }

    talks
        .iter()
        .filter_map(|talk| {
            let current = by_talk
                .get(&talk.id)
                .and_then(|revs| current_revision(revs.as_slice()));
            if current.is_none() {
                tracing::warn!(talk_id = talk.id, "Talk has no revisions, skipping");
            }
            current.map(|rev| TalkResource::new(talk, rev))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ts(year: i32) -> Timestamp {
        Utc.with_ymd_and_hms(year, 6, 6, 11, 43, 6).unwrap()
    }

    fn talk(id: DbId) -> Talk {
        Talk {
            id,
            author_id: 1,
            created_at: ts(2015),
            updated_at: ts(2016),
        }
    }

    fn revision(id: DbId, talk_id: DbId, title: &str, year: i32) -> TalkRevision {
        TalkRevision {
            id,
            talk_id,
            title: title.to_string(),
            talk_type: Some("seminar".to_string()),
            length: Some("45".to_string()),
            level: Some("intermediate".to_string()),
            description: None,
            slides: None,
            organizer_notes: None,
            created_at: ts(year),
            updated_at: ts(year),
        }
    }

    #[test]
    fn attributes_come_from_current_revision() {
        let talks = vec![talk(1)];
        let revisions = vec![
            revision(10, 1, "new title", 2017),
            revision(11, 1, "old title", 1999),
        ];

        let resources = build_talk_resources(&talks, revisions);

        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].id, 1);
        assert_eq!(resources[0].resource_type, "talks");
        assert_eq!(resources[0].attributes.title, "new title");
        assert_eq!(resources[0].attributes.current_revision_id, 10);
    }

    #[test]
    fn talks_keep_their_order_and_skip_revisionless() {
        let talks = vec![talk(2), talk(1), talk(3)];
        let revisions = vec![revision(20, 1, "one", 2017), revision(21, 2, "two", 2017)];

        let resources = build_talk_resources(&talks, revisions);
        let ids: Vec<DbId> = resources.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }

    #[test]
    fn serializes_as_id_type_attributes_envelope() {
        let resource = TalkResource::new(&talk(5), &revision(50, 5, "Ownership", 2017));
        let json = serde_json::to_value(&resource).unwrap();

        assert_eq!(json["id"], 5);
        assert_eq!(json["type"], "talks");
        assert_eq!(json["attributes"]["title"], "Ownership");
        assert_eq!(json["attributes"]["type"], "seminar");
        assert!(json["attributes"]["created_at"].is_string());
    }
}
