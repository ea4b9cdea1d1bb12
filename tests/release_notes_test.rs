use draft_releases::git::Commit;
use draft_releases::notes::{
    classify, create_release_notes, escape_github_markdown, ChangeType, NO_RELEASE_NOTES,
};
use proptest::prelude::*;

fn commit(hash: &str, message: &str) -> Commit {
    Commit::new(hash, message)
}

#[test]
fn release_body_golden() {
    let commits = vec![
        commit(
            "1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b",
            "Add goog.array.flat\n\nRELNOTES[NEW]: Added `goog.array.flat()` for nested arrays.",
        ),
        commit(
            "2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c",
            "Remove goog.dom.xml\n\nRELNOTES[INC]: Removed goog.dom.xml <use DOMParser>.",
        ),
        commit(
            "3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d",
            "Fix date parsing\n\nRELNOTES: Fixes @octocat issue (see #1)!",
        ),
        commit(
            "4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e",
            "Add experimental API\n\nRELNOTES[NEW]: Experimental *streams* API",
        ),
        commit(
            "5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f",
            "Automated rollback of commit 4d5e6f7a8b9c\n\nRolls back 4d5e6f7a8b9c",
        ),
        commit(
            "6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a",
            "Update deps\n\nRELNOTES: N/A",
        ),
    ];

    insta::assert_snapshot!("release_body", create_release_notes(&commits));
}

#[test]
fn only_rolled_back_and_opted_out_commits() {
    let commits = vec![
        commit("aaaaaaa1", "RELNOTES: Something"),
        commit("bbbbbbb2", "This reverts commit aaaaaaa1."),
        commit("ccccccc3", "RELNOTES: none"),
    ];
    assert_eq!(create_release_notes(&commits), NO_RELEASE_NOTES);
}

fn hash_strategy() -> impl Strategy<Value = String> {
    "[0-9a-f]{40}"
}

proptest! {
    #[test]
    fn opt_out_always_wins(
        prefix in "[A-Za-z ]{0,20}",
        tag in prop::sample::select(vec!["", "[NEW]", "[INC]"]),
        marker in prop::sample::select(vec!["none", "None", "NONE", "n/a", "N/A", "na", "NA"]),
        period in prop::bool::ANY,
        hash in hash_strategy(),
    ) {
        let message = format!(
            "{prefix}\n\nRELNOTES{tag}: {marker}{}",
            if period { "." } else { "" }
        );
        prop_assert!(classify(&[Commit::new(hash, message)]).is_empty());
    }

    #[test]
    fn annotations_keep_their_type(
        text in "[A-Za-z][A-Za-z ]{0,30}[0-9]",
        tag in prop::sample::select(vec![
            ("", ChangeType::None),
            ("[NEW]", ChangeType::New),
            ("[INC]", ChangeType::Inc),
        ]),
        hash in hash_strategy(),
    ) {
        let (tag, expected) = tag;
        let notes = classify(&[Commit::new(hash.clone(), format!("Subject\n\nRELNOTES{tag}: {text}"))]);
        prop_assert_eq!(notes.len(), 1);
        prop_assert_eq!(notes[0].change_type, expected);
        prop_assert_eq!(&notes[0].note_text, text.trim());
        prop_assert_eq!(&notes[0].hash, &hash);
    }

    #[test]
    fn escaped_text_has_no_bare_markdown(text in "[ -~]{0,40}") {
        let escaped = escape_github_markdown(&text);
        let mut previous = None;
        for c in escaped.chars() {
            if "*_(){}#!.<>[]".contains(c) {
                prop_assert_eq!(previous, Some('\\'), "bare {:?} in {:?}", c, escaped);
            }
            previous = Some(c);
        }
    }

    #[test]
    fn rollback_by_any_prefix_length(
        hash in hash_strategy(),
        len in 7usize..=40,
    ) {
        let commits = vec![
            Commit::new(hash.clone(), "RELNOTES: Doomed change"),
            Commit::new("f".repeat(40), format!("Rolls back {}", &hash[..len])),
        ];
        let notes = classify(&commits);
        prop_assert_eq!(notes.len(), 1);
        prop_assert!(notes[0].rolled_back);
        prop_assert_eq!(create_release_notes(&commits), NO_RELEASE_NOTES);
    }
}
