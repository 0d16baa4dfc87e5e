// partial match: every story that involves one pairing
use crate::core::record::CompatibilityRecord;
use crate::core::table::CompatibilityTable;
use crate::core::types::Pairing;

impl CompatibilityTable {
    /// All records where `p` is stored as either side, in collection order.
    ///
    /// This is a membership test on the stored fields, it does not go through the canonical key.
    pub fn stories_for(&self, p: Pairing) -> Vec<&CompatibilityRecord> {
        self.records.iter().filter(|r| r.involves(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::mk_record;

    fn p(s: &str) -> Pairing {
        s.parse().unwrap()
    }

    fn mk_table() -> CompatibilityTable {
        CompatibilityTable::new(vec![
            mk_record("1sp", "1so", "a"),
            mk_record("3sx", "5so", "b"),
            mk_record("2sp", "1sp", "c"),
            mk_record("1sx", "2sp", "d"),
            mk_record("1sp", "1sp", "e"),
        ])
    }

    #[test]
    fn includes_records_from_both_sides_in_order() {
        let t = mk_table();
        let titles: Vec<&str> = t.stories_for(p("1sp")).into_iter().map(|r| r.title.as_str()).collect();
        //"a" has 1sp first, "c" has it second, "e" has it on both sides (listed once)
        assert_eq!(titles, vec!["a", "c", "e"]);
    }

    #[test]
    fn results_are_complete_and_exclusive() {
        let t = mk_table();
        for t_id in 1..=9u8 {
            for s in crate::core::types::Subtype::ALL {
                let q = Pairing::new(t_id, s);
                let got = t.stories_for(q);
                let expected: Vec<_> = t.iter().filter(|r| r.side_a() == q || r.side_b() == q).collect();
                assert_eq!(got.len(), expected.len(), "{q}");
                for r in got {
                    assert!(r.side_a() == q || r.side_b() == q, "{q} matched {}", r.title);
                }
            }
        }
    }

    #[test]
    fn same_type_other_subtype_does_not_match() {
        let t = mk_table();
        let titles: Vec<&str> = t.stories_for(p("1so")).into_iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["a"]);
    }

    #[test]
    fn no_match_is_empty() {
        let t = mk_table();
        assert!(t.stories_for(p("8sp")).is_empty());
        assert!(CompatibilityTable::default().stories_for(p("1sp")).is_empty());
    }
}
