//! Property tests for field validation, birthday arithmetic and pagination.

use abookapp::collection::AddressBook;
use abookapp::field::{Schema, PHONE};
use abookapp::model::Record;
use chrono::NaiveDate;
use proptest::prelude::*;
use std::collections::HashSet;

fn fast_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 256,
        ..ProptestConfig::default()
    }
}

fn valid_phone_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        r"\+38\(0[0-9]{2}\)[0-9]{3}-[0-9]{2}-[0-9]{2}",
        r"0[0-9]{9}",
        r"\+380[0-9]{9}",
    ]
}

fn date_strategy(years: std::ops::Range<i32>) -> impl Strategy<Value = NaiveDate> {
    (years, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).expect("day 1..=28 exists in every month")
    })
}

proptest! {
    #![proptest_config(fast_config())]

    #[test]
    fn valid_phones_normalize_to_digits(raw in valid_phone_strategy()) {
        let phone = PHONE.check(&raw).unwrap();
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        let expected = if raw.starts_with('+') { format!("+{digits}") } else { digits };
        prop_assert_eq!(phone.value(), &expected);
        prop_assert_eq!(phone.raw(), raw.as_str());
    }

    #[test]
    fn letters_are_never_phones(raw in "[A-Za-z]{1,16}") {
        prop_assert!(!PHONE.is_valid(&raw));
    }

    #[test]
    fn rejected_phone_leaves_record_unchanged(
        good in valid_phone_strategy(),
        bad in "[A-Za-z .]{1,12}",
    ) {
        let schema = Schema::default();
        let mut record = Record::new(&schema, "Anna").unwrap();
        record.add_phone(&schema, &good).unwrap();
        let before = record.clone();

        prop_assert!(record.add_phone(&schema, &bad).is_err());
        prop_assert!(record.edit_phone(&schema, &good, &bad).is_err());
        prop_assert!(record.replace_phones(&schema, &bad).is_err());
        prop_assert_eq!(record, before);
    }

    #[test]
    fn next_birthday_is_within_a_year(
        born in date_strategy(1900..2020),
        today in date_strategy(1970..2100),
    ) {
        let schema = Schema::default();
        let mut record = Record::new(&schema, "Anna").unwrap();
        record
            .set_birthday(&schema, &born.format("%Y-%m-%d").to_string())
            .unwrap();

        let days = record.days_to_birthday(today).unwrap();
        prop_assert!((0..=365).contains(&days));
        let next = record.next_birthday(today).unwrap();
        prop_assert!(next >= today);
        prop_assert_eq!(next - today, chrono::Duration::days(days));
    }

    #[test]
    fn pages_cover_the_collection_exactly(count in 0usize..40, size in 1usize..12) {
        let schema = Schema::default();
        let book: AddressBook = (0..count)
            .map(|i| Record::new(&schema, &format!("Contact {i}")).unwrap())
            .collect();

        let sizes: Vec<usize> = book.paginate(size).map(<[Record]>::len).collect();
        prop_assert_eq!(sizes.len(), count.div_ceil(size));
        prop_assert_eq!(sizes.iter().sum::<usize>(), count);
        if let Some((last, full)) = sizes.split_last() {
            prop_assert!(full.iter().all(|&s| s == size));
            prop_assert!(*last >= 1 && *last <= size);
        }
    }

    #[test]
    fn search_results_are_an_ordered_subset(
        names in prop::collection::hash_set("[A-Za-z]{1,10}", 0..20),
        query in "[a-z]{0,3}",
    ) {
        let schema = Schema::default();
        let book: AddressBook = names
            .iter()
            .map(|n| Record::new(&schema, n).unwrap())
            .collect();
        prop_assert_eq!(book.len(), names.len());

        let found: Vec<&str> = book.search(&query).iter().map(|r| r.name()).collect();
        let expected: Vec<&str> = book
            .keys()
            .filter(|k| k.to_lowercase().contains(&query))
            .collect();
        prop_assert_eq!(&found, &expected);

        let unique: HashSet<&str> = found.iter().copied().collect();
        prop_assert_eq!(unique.len(), found.len());
    }
}
