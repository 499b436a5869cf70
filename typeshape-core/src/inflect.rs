//! English plural detection and singularization.
//!
//! Only the last word of a camelCase, snake_case or kebab-case identifier
//! is inflected, so `userAddresses` singularizes to `userAddress` and
//! `metaData` is treated as uncountable.

/// Nouns whose singular and plural forms are identical.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "deer",
    "equipment",
    "feedback",
    "fish",
    "information",
    "metadata",
    "money",
    "news",
    "rice",
    "series",
    "sheep",
    "species",
];

/// Singular nouns that happen to end in `s`.
const SINGULAR_S: &[&str] = &[
    "alias", "atlas", "bias", "canvas", "gas", "lens", "this", "yes",
];

/// `(singular, plural)` pairs the suffix rules get wrong.
const IRREGULAR: &[(&str, &str)] = &[
    ("abuse", "abuses"),
    ("alias", "aliases"),
    ("analysis", "analyses"),
    ("atlas", "atlases"),
    ("axis", "axes"),
    ("bias", "biases"),
    ("brownie", "brownies"),
    ("cache", "caches"),
    ("calorie", "calories"),
    ("canvas", "canvases"),
    ("cargo", "cargoes"),
    ("child", "children"),
    ("cookie", "cookies"),
    ("crisis", "crises"),
    ("criterion", "criteria"),
    ("diagnosis", "diagnoses"),
    ("echo", "echoes"),
    ("emphasis", "emphases"),
    ("excuse", "excuses"),
    ("foot", "feet"),
    ("fuse", "fuses"),
    ("gas", "gases"),
    ("goose", "geese"),
    ("hero", "heroes"),
    ("index", "indices"),
    ("knife", "knives"),
    ("lens", "lenses"),
    ("life", "lives"),
    ("man", "men"),
    ("matrix", "matrices"),
    ("medium", "media"),
    ("mouse", "mice"),
    ("movie", "movies"),
    ("ox", "oxen"),
    ("parenthesis", "parentheses"),
    ("person", "people"),
    ("potato", "potatoes"),
    ("prognosis", "prognoses"),
    ("quiz", "quizzes"),
    ("rookie", "rookies"),
    ("synopsis", "synopses"),
    ("testis", "testes"),
    ("thesis", "theses"),
    ("tomato", "tomatoes"),
    ("tooth", "teeth"),
    ("vertex", "vertices"),
    ("veto", "vetoes"),
    ("wife", "wives"),
    ("woman", "women"),
    ("zombie", "zombies"),
];

/// Suffix rewrite for plural words.
struct Rule {
    suffix: &'static str,
    replacement: &'static str,
    /// Letters that must not directly precede `suffix`.
    not_after: &'static str,
}

const fn rule(suffix: &'static str, replacement: &'static str) -> Rule {
    Rule {
        suffix,
        replacement,
        not_after: "",
    }
}

/// Applied to plural words in order, first match wins.
const SINGULAR_RULES: &[Rule] = &[
    rule("sses", "ss"),
    rule("zzes", "zz"),
    rule("shes", "sh"),
    rule("ches", "ch"),
    rule("xes", "x"),
    // statuses, buses, viruses; but causes, houses
    Rule {
        suffix: "uses",
        replacement: "us",
        not_after: "aou",
    },
    rule("alves", "alf"),
    rule("elves", "elf"),
    rule("olves", "olf"),
    rule("arves", "arf"),
    rule("eaves", "eaf"),
    rule("oaves", "oaf"),
    rule("ies", "y"),
    rule("s", ""),
];

impl Rule {
    fn matches(&self, word: &str) -> bool {
        if word.len() <= self.suffix.len() || !word.ends_with(self.suffix) {
            return false;
        }
        let stem = &word[..word.len() - self.suffix.len()];
        !stem
            .chars()
            .next_back()
            .is_some_and(|c| self.not_after.contains(c))
    }
}

/// Endings of singular words that must not lose their trailing `s`.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Suffixes naming a collection of the stem (e.g., `UserList`).
const COLLECTION_SUFFIXES: &[&str] = &["List", "Array", "Collection"];

/// Split an identifier into everything before its last word and the last word.
fn split_last_word(name: &str) -> (&str, &str) {
    let bytes = name.as_bytes();
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'_' || b == b'-' {
            start = i + 1;
        } else if i > 0 && b.is_ascii_uppercase() && bytes[i - 1].is_ascii_lowercase() {
            start = i;
        }
    }
    name.split_at(start)
}

/// Re-case `replacement` to follow the casing of `original`.
fn match_case(replacement: &str, original: &str) -> String {
    let has_lower = original.chars().any(|c| c.is_lowercase());
    let has_upper = original.chars().any(|c| c.is_uppercase());
    if has_upper && !has_lower {
        replacement.to_uppercase()
    } else if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = replacement.chars();
        match chars.next() {
            None => String::new(),
            Some(c) => c.to_uppercase().chain(chars).collect(),
        }
    } else {
        replacement.to_string()
    }
}

fn irregular_by_plural(word: &str) -> Option<&'static str> {
    IRREGULAR
        .iter()
        .find(|(_, plural)| *plural == word)
        .map(|(singular, _)| *singular)
}

fn is_irregular_singular(word: &str) -> bool {
    IRREGULAR.iter().any(|(singular, _)| *singular == word)
}

fn rule_for(word: &str) -> Option<&'static Rule> {
    if SINGULAR_S.contains(&word) || SINGULAR_ENDINGS.iter().any(|e| word.ends_with(e)) {
        return None;
    }
    SINGULAR_RULES.iter().find(|rule| rule.matches(word))
}

/// Check whether the last word of `name` is a plural noun.
///
/// Uncountable nouns count as plural, matching how they are used as
/// collection property names (`data`, `news`).
pub fn is_plural(name: &str) -> bool {
    let (_, word) = split_last_word(name);
    let lower = word.to_ascii_lowercase();
    if lower.is_empty() {
        return false;
    }
    if UNCOUNTABLE.contains(&lower.as_str()) || irregular_by_plural(&lower).is_some() {
        return true;
    }
    if is_irregular_singular(&lower) {
        return false;
    }
    rule_for(&lower).is_some()
}

/// Singular form of `name`, or `name` unchanged if it is not plural.
pub fn singularize(name: &str) -> String {
    let (head, word) = split_last_word(name);
    let lower = word.to_ascii_lowercase();

    if UNCOUNTABLE.contains(&lower.as_str()) || is_irregular_singular(&lower) {
        return name.to_string();
    }
    if let Some(singular) = irregular_by_plural(&lower) {
        return format!("{}{}", head, match_case(singular, word));
    }
    match rule_for(&lower) {
        Some(rule) => {
            let (stem, removed) = word.split_at(word.len() - rule.suffix.len());
            format!("{}{}{}", head, stem, match_case(rule.replacement, removed))
        }
        None => name.to_string(),
    }
}

/// Name for the element of a collection called `name`.
///
/// A plural name is singularized (`users` -> `user`); anything else gets an
/// `Item` suffix (`user` -> `userItem`). A trailing collection word is
/// dropped first, so `UserList` names its elements `UserItem` and
/// `UsersList` names them `User`.
pub fn derive_plural_singular(name: &str) -> String {
    for suffix in COLLECTION_SUFFIXES {
        match name.strip_suffix(suffix) {
            Some(stem) if !stem.is_empty() => return derive_plural_singular(stem),
            _ => {}
        }
    }

    if is_plural(name) {
        singularize(name)
    } else {
        format!("{}Item", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_plural_singular() {
        assert_eq!(derive_plural_singular("users"), "user");
        assert_eq!(derive_plural_singular("user"), "userItem");
    }

    #[test]
    fn test_derive_collection_suffix() {
        assert_eq!(derive_plural_singular("UserList"), "UserItem");
        assert_eq!(derive_plural_singular("UsersList"), "User");
        assert_eq!(derive_plural_singular("OrderCollection"), "OrderItem");
        assert_eq!(derive_plural_singular("List"), "ListItem");
    }

    #[test]
    fn test_suffix_rules() {
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("matches"), "match");
        assert_eq!(singularize("dishes"), "dish");
        assert_eq!(singularize("wolves"), "wolf");
        assert_eq!(singularize("shelves"), "shelf");
        assert_eq!(singularize("leaves"), "leaf");
        assert_eq!(singularize("drives"), "drive");
        assert_eq!(singularize("shoes"), "shoe");
    }

    #[test]
    fn test_singular_ending_in_s_or_z() {
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("buses"), "bus");
        assert_eq!(singularize("viruses"), "virus");
        assert_eq!(singularize("aliases"), "alias");
        assert_eq!(singularize("gases"), "gas");
        assert_eq!(singularize("quizzes"), "quiz");
        assert_eq!(singularize("buzzes"), "buzz");
        assert_eq!(singularize("crises"), "crisis");
        assert_eq!(singularize("axes"), "axis");
        assert_eq!(singularize("orderStatuses"), "orderStatus");
        assert_eq!(derive_plural_singular("Statuses"), "Status");
    }

    #[test]
    fn test_uses_after_vowel_keeps_e() {
        assert_eq!(singularize("causes"), "cause");
        assert_eq!(singularize("houses"), "house");
        assert_eq!(singularize("uses"), "use");
        assert_eq!(singularize("excuses"), "excuse");
        assert_eq!(singularize("bases"), "base");
        assert_eq!(singularize("sizes"), "size");
    }

    #[test]
    fn test_irregular() {
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("children"), "child");
        assert_eq!(singularize("movies"), "movie");
        assert_eq!(singularize("heroes"), "hero");
        assert_eq!(singularize("wives"), "wife");
    }

    #[test]
    fn test_uncountable_is_plural() {
        assert!(is_plural("data"));
        assert!(is_plural("news"));
        assert_eq!(derive_plural_singular("data"), "data");
    }

    #[test]
    fn test_singular_words_ending_in_s() {
        assert!(!is_plural("status"));
        assert!(!is_plural("address"));
        assert!(!is_plural("analysis"));
        assert!(!is_plural("alias"));
        assert_eq!(derive_plural_singular("status"), "statusItem");
    }

    #[test]
    fn test_only_last_word_is_inflected() {
        assert_eq!(singularize("userAddresses"), "userAddress");
        assert_eq!(singularize("line_items"), "line_item");
        assert_eq!(singularize("OrderPeople"), "OrderPerson");
        assert!(is_plural("userMetadata"));
        assert!(!is_plural("newsFeed"));
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(singularize("Users"), "User");
        assert_eq!(singularize("USERS"), "USER");
        assert_eq!(singularize("CATEGORIES"), "CATEGORY");
        assert_eq!(singularize("People"), "Person");
    }

    #[test]
    fn test_not_plural_is_unchanged() {
        assert_eq!(singularize("user"), "user");
        assert!(!is_plural(""));
        assert_eq!(derive_plural_singular(""), "Item");
    }
}
