use serde_json::json;

use super::*;

fn raw(value: serde_json::Value) -> RawGameRecord {
    RawGameRecord::from_value(value)
}

#[test]
fn test_minimal_record() {
    let record = normalize(&raw(json!({"id": "3", "title": "Mystery Game"}))).unwrap();
    assert_eq!(record.id, "3");
    assert_eq!(record.title, "Mystery Game");
    assert_eq!(record.sort_key, "Mystery Game");
    assert!(record.category_labels.is_empty());
    assert!(record.thumbnail_url.is_empty());
    assert!(record.video_url.is_empty());
    assert!(record.download_url.is_empty());
    assert!(record.manual_url.is_empty());
    assert!(record.year.is_none());
}

#[test]
fn test_gameid_preferred_over_id() {
    let record = normalize(&raw(json!({"id": "1", "gameid": "zool-1992", "title": "Zool"}))).unwrap();
    assert_eq!(record.id, "zool-1992");
}

#[test]
fn test_numeric_id_is_stringified() {
    let record = normalize(&raw(json!({"id": 42, "title": "Paradroid"}))).unwrap();
    assert_eq!(record.id, "42");
}

#[test]
fn test_missing_id_is_invalid() {
    assert_eq!(normalize(&raw(json!({"title": "No Id"}))), Err(InvalidRecord));
    assert_eq!(normalize(&raw(json!({"id": "   ", "title": "Blank"}))), Err(InvalidRecord));
}

#[test]
fn test_title_and_sort_key_fallbacks() {
    let untitled = normalize(&raw(json!({"id": "x1"}))).unwrap();
    assert_eq!(untitled.title, "x1");
    assert_eq!(untitled.sort_key, "x1");

    let sorted = normalize(&raw(json!({
        "id": "7",
        "title": "The Last Ninja",
        "sortTitle": "Last Ninja, The"
    })))
    .unwrap();
    assert_eq!(sorted.sort_key, "Last Ninja, The");

    let both = normalize(&raw(json!({
        "id": "8",
        "title": "The Sentinel",
        "sorttitle": "Sentinel",
        "sortTitle": "Ignored"
    })))
    .unwrap();
    assert_eq!(both.sort_key, "Sentinel");
}

#[test]
fn test_category_labels_follow_field_priority() {
    let record = normalize(&raw(json!({
        "id": "1",
        "title": "Turrican",
        "collection": "Top Picks",
        "tags": ["Shoot 'em Up"],
        "genre": "Action Adventure",
        "genres": ["Platform Games", "  "]
    })))
    .unwrap();
    assert_eq!(
        record.category_labels,
        vec!["Platform Games", "Action Adventure", "Shoot 'em Up", "Top Picks"]
    );
    assert_eq!(record.primary_label(), Some("Platform Games"));
}

#[test]
fn test_category_labels_dedup_case_insensitive() {
    let record = normalize(&raw(json!({
        "id": "1",
        "title": "Bubble Bobble",
        "genres": ["Arcade Games", "Miscellaneous"],
        "genre": "arcade games",
        "collections": ["MIscellaneous", " Arcade Games "]
    })))
    .unwrap();
    assert_eq!(record.category_labels, vec!["Arcade Games", "Miscellaneous"]);
}

#[test]
fn test_unexpected_shapes_degrade_to_empty() {
    let record = normalize(&raw(json!({
        "id": "5",
        "title": "Elite",
        "genres": {"not": "a list"},
        "thumbnail": false,
        "year": 1985,
        "developer": null
    })))
    .unwrap();
    assert!(record.category_labels.is_empty());
    assert!(record.thumbnail_url.is_empty());
    assert_eq!(record.year.as_deref(), Some("1985"));
    assert!(record.developer.is_none());
}

#[test]
fn test_thumbnail_fallback_and_dot_slash() {
    let record = normalize(&raw(json!({
        "id": "1",
        "title": "Zool",
        "thumblink": "./resources/images/thumbnails/platform/zool.png"
    })))
    .unwrap();
    assert_eq!(record.thumbnail_url, "resources/images/thumbnails/platform/zool.png");

    let preferred = normalize(&raw(json!({
        "id": "2",
        "title": "Zool 2",
        "thumbnail": "../img/zool2.png",
        "thumblink": "ignored.png"
    })))
    .unwrap();
    assert_eq!(preferred.thumbnail_url, "../img/zool2.png");
}

#[test]
fn test_video_full_url_kept() {
    let record = normalize(&raw(json!({
        "id": "1",
        "title": "Zool",
        "video": "https://youtu.be/abc123"
    })))
    .unwrap();
    assert_eq!(record.video_url, "https://youtu.be/abc123");
}

#[test]
fn test_video_bare_id_synthesized() {
    let record = normalize(&raw(json!({"id": "1", "title": "Zool", "videoid": "dQw4w9WgXcQ"}))).unwrap();
    assert_eq!(record.video_url, "https://www.youtube.com/watch?v=dQw4w9WgXcQ");

    let camel = normalize(&raw(json!({"id": "2", "title": "Zool", "videoId": "a-b_C"}))).unwrap();
    assert_eq!(camel.video_url, "https://www.youtube.com/watch?v=a-b_C");
}

#[test]
fn test_video_url_in_later_field_beats_bare_id() {
    let record = normalize(&raw(json!({
        "id": "1",
        "video": "abc123",
        "videoId": "https://youtu.be/real"
    })))
    .unwrap();
    assert_eq!(record.video_url, "https://youtu.be/real");

    let record = normalize(&raw(json!({
        "id": "2",
        "videoid": "abc123",
        "video": "not a token",
        "videoId": "https://www.youtube.com/watch?v=real"
    })))
    .unwrap();
    assert_eq!(record.video_url, "https://www.youtube.com/watch?v=real");
}

#[test]
fn test_video_garbage_is_empty() {
    let record = normalize(&raw(json!({"id": "1", "title": "Zool", "videoid": "not a token"}))).unwrap();
    assert!(record.video_url.is_empty());
}

#[test]
fn test_disk_beats_pdf_and_tape() {
    let input = raw(json!({
        "id": "1",
        "title": "Boulder Dash",
        "pdf": "docs/boulder.pdf",
        "tape": "tapes/boulder.tap",
        "disk": ["disks/boulder-a.d64", "disks/boulder-b.d64"]
    }));
    for _ in 0..3 {
        let record = normalize(&input).unwrap();
        assert_eq!(record.download_url, "disks/boulder-a.d64");
        assert_eq!(record.download_urls, vec!["disks/boulder-a.d64", "disks/boulder-b.d64"]);
        assert_eq!(record.manual_url, "docs/boulder.pdf");
    }
}

#[test]
fn test_empty_priority_fields_are_skipped() {
    let record = normalize(&raw(json!({
        "id": "1",
        "title": "Wizball",
        "disk": [],
        "d64": "",
        "tap": "tapes/wizball.tap",
        "prg": "wizball.prg",
        "pdflink": [],
        "manual": "manuals/wizball.txt",
        "docs": "docs/wizball.html"
    })))
    .unwrap();
    assert_eq!(record.download_url, "tapes/wizball.tap");
    assert_eq!(record.manual_url, "manuals/wizball.txt");
}

#[test]
fn test_cartridge_before_program() {
    let record = normalize(&raw(json!({
        "id": "1",
        "title": "International Soccer",
        "prg": "soccer.prg",
        "crt": "soccer.crt"
    })))
    .unwrap();
    assert_eq!(record.download_url, "soccer.crt");
}

#[test]
fn test_lemon_links_merged() {
    let record = normalize(&raw(json!({
        "id": "1",
        "title": "Paradroid",
        "lemon": ["https://www.lemon64.com/game/paradroid"],
        "lemonUrl": "https://www.lemon64.com/game/paradroid"
    })))
    .unwrap();
    assert_eq!(record.lemon_urls, vec!["https://www.lemon64.com/game/paradroid"]);
}

#[test]
fn test_normalize_is_pure() {
    let input = raw(json!({
        "gameid": "9",
        "title": "Uridium",
        "genres": ["Shoot 'em Up"],
        "videoid": "xyz",
        "disk": "uridium.d64"
    }));
    assert_eq!(normalize(&input), normalize(&input));
}

#[test]
fn test_normalize_all_counts_invalid_and_duplicates() {
    let raws: Vec<RawGameRecord> = vec![
        raw(json!({"id": "1", "title": "Zool"})),
        raw(json!({"title": "No Id"})),
        raw(json!("not an object")),
        raw(json!({"id": "1", "title": "Zool (copy)"})),
        raw(json!({"id": "2", "title": "Arkanoid"})),
    ];
    let catalog = normalize_all(&raws);
    assert_eq!(catalog.summary.total, 5);
    assert_eq!(catalog.summary.loaded, 2);
    assert_eq!(catalog.summary.skipped_invalid, 2);
    assert_eq!(catalog.summary.duplicate_ids, 1);
    assert_eq!(catalog.records[0].title, "Zool");
    assert_eq!(catalog.records[1].id, "2");
}
