use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use std::sync::OnceLock;

static COLLATOR: OnceLock<CollatorBorrowed<'static>> = OnceLock::new();

fn collator() -> &'static CollatorBorrowed<'static> {
    COLLATOR.get_or_init(|| {
        // Secondary strength: accents matter, letter case does not
        let mut options = CollatorOptions::default();
        options.strength = Some(Strength::Secondary);
        Collator::try_new(Default::default(), options)
            .expect("root collation data is compiled in")
    })
}

/// Root-locale ordering for names, tags and atoms.
///
/// Accented letters sort next to their base letter ("Éclair" before "Flan")
/// and strings that differ only in case compare equal, so a stable sort keeps
/// their original order.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collator().compare(a, b)
}
