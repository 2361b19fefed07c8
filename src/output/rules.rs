//! Mangling rules in hashcat/John syntax.
//!
//! Extracted numbers become append (`$d`) and prepend (`^d`) rules combined
//! with each case function, on top of the best64 base set.

use crate::output::LineOutput;
use crate::result::ExtractionResult;
use std::collections::HashSet;

/// The best64 base rule set.
pub const BEST64_RULES: [&str; 77] = [
    ":", "r", "u", "T0", "$0", "$1", "$2", "$3", "$4", "$5", "$6", "$7", "$8", "$9", "$0 $0", "$0 $1",
    "$0 $2", "$1 $1", "$1 $2", "$1 $3", "$2 $1", "$2 $2", "$2 $3", "$6 $9", "$7 $7", "$8 $8", "$9 $9",
    "$1 $2 $3", "$e", "$s", "] $a", "] ] $s", "] ] $a", "] ] $e $r", "] ] $i $e", "] ] ] $o", "] ] ] $y",
    "] ] ] $1 $2 $3", "] ] ] $m $a $n", "] ] ] $d $o $g", "^1", "^e ^h ^t", "o0d", "o0m o1a", "so0", "si1",
    "se3", "D2", "D2 D2", "D3", "D4", "'5 D3", "'5 $1", "]", "] ]", "] ] ]", "] ] ] d", "] ] D1 ]",
    "+5 ] } } } } '4", "O02 { { { { { {", "} ] ] {", "} } -0 O12", "} } }", "} } } } '4", "} } } } } '5",
    "} } } } } } Y4 '4 d", "*04 +0 '4", "*05 O03 d '3 p1", "+0 +0 +0 +0 +0 +0 +0 +0", "+0 +0 +0 O12",
    "Z4 '8 O42", "Z5 '6 O31 ] p1", "Z5 *75 '5 { O02", "d O28 Y4 '4 d", "f *A5 '8 O14", "p2 '7 p1 O58",
    "O14 d p2 '6",
];

/// Case functions: lower, upper, capitalize, inverted capitalize, reverse.
pub const CASE_FUNCTIONS: [char; 5] = ['l', 'u', 'c', 'C', 'r'];

/// Numbers 0..=NUMBER_RANGE get rules even when they were not extracted.
const NUMBER_RANGE: u32 = 100;

/// Rule set for one extraction result.
#[derive(Debug, Clone, Default)]
pub struct RuleGenerator {
    rules: Vec<String>,
}

impl RuleGenerator {
    /// Builds the base rules followed by number rules for the extracted
    /// numbers (rank order) and then 0..=100. Each number is used once.
    pub fn from_result(result: &ExtractionResult) -> Self {
        let extracted = result.number_terms().map(str::to_string);
        let range = (0..=NUMBER_RANGE).map(|n| n.to_string());

        let mut seen = HashSet::new();
        let numbers: Vec<String> = extracted.chain(range).filter(|n| seen.insert(n.clone())).collect();

        let mut rules: Vec<String> = BEST64_RULES.iter().map(|r| r.to_string()).collect();
        rules.reserve(numbers.len() * CASE_FUNCTIONS.len() * 2);
        for number in &numbers {
            rules.extend(number_rules(number));
        }

        Self { rules }
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl LineOutput for RuleGenerator {
    const PREFIX: &'static str = "rules";
    const EXTENSION: &'static str = "rule";

    fn lines(&self) -> &[String] {
        &self.rules
    }
}

/// Append and prepend rules for `number`, one pair per case function.
fn number_rules(number: &str) -> Vec<String> {
    let append: String = number.chars().map(|d| format!("${}", d)).collect();
    let prepend: String = number.chars().rev().map(|d| format!("^{}", d)).collect();

    CASE_FUNCTIONS
        .iter()
        .flat_map(|f| [format!("{}{}", f, append), format!("{}{}", f, prepend)])
        .collect()
}
