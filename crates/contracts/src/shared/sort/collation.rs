//! Сравнение строк по правилам французской локали на базовом уровне
//!
//! Базовый уровень (ICU `Strength::Primary`): регистр и диакритика не
//! различаются, "Émile" == "emile", "Søren" == "Soren".
//!
//! [`fold`] не участвует в сортировке, он нужен только для поиска.

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

thread_local! {
    static FR_COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Primary);
        Collator::try_new(&locale!("fr").into(), options).ok()
    };
}

/// Сравнение двух строк (французская локаль, базовый уровень)
pub fn compare_fr_base(a: &str, b: &str) -> Ordering {
    FR_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        // compiled data всегда содержит "fr", сюда не попадаем
        None => fold(a).cmp(&fold(b)),
    })
}

/// Строка, упорядоченная через [`compare_fr_base`].
///
/// Равенство тоже базового уровня: `CollationKey::new("É") == CollationKey::new("e")`.
#[derive(Debug, Clone)]
pub struct CollationKey(String);

impl CollationKey {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for CollationKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CollationKey {}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_fr_base(&self.0, &other.0)
    }
}

fn push_folded(c: char, out: &mut String) {
    match c {
        'œ' | 'Œ' => out.push_str("oe"),
        'æ' | 'Æ' => out.push_str("ae"),
        'ß' | 'ẞ' => out.push_str("ss"),
        c if c.is_control() => {}
        c => {
            for base in c.nfd().filter(|d| !is_combining_mark(*d)) {
                out.extend(base.to_lowercase());
            }
        }
    }
}

/// Строка без регистра и диакритики, для поиска подстрок
pub fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        push_folded(c, &mut out);
    }
    out
}
