//! Canonical dataset ordering.
//!
//! Records sort by `(domain, conference, year, title)` and then get dense
//! 1-based IDs from their sorted position. The domain key is the serialized
//! label string, not the enum declaration order — "DB/IR" sorts before
//! "NLP".

use benchdex_shared::PaperRecord;

/// The canonical sort key for a record.
fn sort_key(record: &PaperRecord) -> (&str, &str, u16, &str) {
    (
        record.domain.as_str(),
        record.conference.as_str(),
        record.year,
        record.title.as_str(),
    )
}

/// Sort records into canonical order and renumber `id` as `1..=N`.
///
/// The sort is stable, so records with identical keys keep their input
/// order and still receive distinct consecutive IDs.
pub fn sort_and_renumber(records: &mut [PaperRecord]) {
    records.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));
    for (index, record) in records.iter_mut().enumerate() {
        record.id = (index + 1) as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchdex_shared::Domain;

    fn make_record(title: &str, conference: &str, year: u16, domain: Domain) -> PaperRecord {
        PaperRecord {
            id: 0,
            title: title.into(),
            conference: conference.into(),
            year,
            domain,
            category: String::new(),
            subcategory: String::new(),
            url: String::new(),
            r#abstract: String::new(),
            matched_keywords: vec!["benchmark".into()],
        }
    }

    #[test]
    fn ids_are_a_dense_bijection() {
        let mut records = vec![
            make_record("Z Benchmark", "ICML", 2023, Domain::AiMl),
            make_record("A Benchmark", "CVPR", 2024, Domain::Cv),
            make_record("M Benchmark", "ACL", 2022, Domain::Nlp),
        ];
        sort_and_renumber(&mut records);

        let mut ids: Vec<u32> = records.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn adjacent_pairs_are_ordered() {
        let mut records = vec![
            make_record("B", "ICML", 2024, Domain::AiMl),
            make_record("A", "ICML", 2024, Domain::AiMl),
            make_record("A", "ICML", 2023, Domain::AiMl),
            make_record("A", "CVPR", 2024, Domain::Cv),
            make_record("A", "AAAI", 2024, Domain::AiMl),
        ];
        sort_and_renumber(&mut records);

        for pair in records.windows(2) {
            assert!(sort_key(&pair[0]) <= sort_key(&pair[1]));
        }
        // Within AI/ML, AAAI sorts before ICML; year before title.
        assert_eq!(records[0].conference, "AAAI");
        assert_eq!(records[1].year, 2023);
        assert_eq!(records[2].title, "A");
        assert_eq!(records[3].title, "B");
    }

    #[test]
    fn domain_label_order_not_declaration_order() {
        // "DB/IR" < "NLP" as strings, even though Nlp is declared before
        // DbIr in the enum.
        let mut records = vec![
            make_record("A", "ACL", 2024, Domain::Nlp),
            make_record("A", "SIGMOD", 2024, Domain::DbIr),
            make_record("A", "ICSE", 2024, Domain::Se),
            make_record("A", "WEIRD", 2024, Domain::Unknown),
            make_record("A", "CVPR", 2024, Domain::Cv),
            make_record("A", "ICML", 2024, Domain::AiMl),
        ];
        sort_and_renumber(&mut records);

        let domains: Vec<&str> = records.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(domains, vec!["AI/ML", "CV", "DB/IR", "NLP", "SE", "Unknown"]);
    }

    #[test]
    fn renumbering_is_idempotent() {
        let mut records = vec![
            make_record("B Benchmark", "ICML", 2023, Domain::AiMl),
            make_record("A Benchmark", "ICML", 2023, Domain::AiMl),
        ];
        sort_and_renumber(&mut records);
        let first_pass: Vec<(u32, String)> =
            records.iter().map(|r| (r.id, r.title.clone())).collect();

        sort_and_renumber(&mut records);
        let second_pass: Vec<(u32, String)> =
            records.iter().map(|r| (r.id, r.title.clone())).collect();

        assert_eq!(first_pass, second_pass);
    }

    #[test]
    fn identical_keys_keep_input_order_and_distinct_ids() {
        // Two records with the same title from the "same" source must both
        // survive with distinct consecutive IDs.
        let mut first = make_record("Same Benchmark", "ICML", 2023, Domain::AiMl);
        first.url = "first".into();
        let mut second = make_record("Same Benchmark", "ICML", 2023, Domain::AiMl);
        second.url = "second".into();

        let mut records = vec![first, second];
        sort_and_renumber(&mut records);

        assert_eq!(records[0].url, "first");
        assert_eq!(records[1].url, "second");
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 2);
    }

    #[test]
    fn empty_collection_is_valid() {
        let mut records: Vec<PaperRecord> = Vec::new();
        sort_and_renumber(&mut records);
        assert!(records.is_empty());
    }
}
