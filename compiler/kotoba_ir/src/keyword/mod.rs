//! The keyword table.
//!
//! Every recognized surface keyword belongs to one or more word classes.
//! The table is pure data: the tokenizer splits on [`all_keywords`], the token
//! cursor uses the enclosure classes to protect quoted strings and
//! sub-expressions, and grammar templates are written in terms of classes.
//!
//! `を` is deliberately a single class ([`WordClass::Object`]) used by both the
//! loop and binding forms; productions tell them apart by the keywords that
//! follow it, never by class identity.

/// A named set of equivalent surface keywords.
///
/// Variant order is the tokenizer's split order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum WordClass {
    /// Statement delimiter: newline or `。`.
    Delimiter,
    /// Opens a string literal: `「`.
    StringStart,
    /// Closes a string literal: `」`.
    StringEnd,
    /// Opens a sub-expression: `ここから` or `(`.
    EvalStart,
    /// Closes a sub-expression: `ここまで` or `)`.
    EvalEnd,
    /// Conditional marker: `もし`.
    If,
    /// Ends the condition: `ならば`.
    Then,
    /// Introduces the else branch: `違うなら`.
    Else,
    /// Loop marker: `繰り返す`.
    Repeat,
    /// Loop count suffix: `回`.
    Times,
    /// Object particle: `を` (loop target and binding name).
    Object,
    /// Binding terminator: `とする`.
    Bind,
    /// Boolean true literal: `真`.
    True,
    /// Boolean false literal: `偽`.
    False,
    /// Empty literal: `空`.
    Empty,
}

impl WordClass {
    /// Every class in table order.
    pub const ALL: [WordClass; 15] = [
        WordClass::Delimiter,
        WordClass::StringStart,
        WordClass::StringEnd,
        WordClass::EvalStart,
        WordClass::EvalEnd,
        WordClass::If,
        WordClass::Then,
        WordClass::Else,
        WordClass::Repeat,
        WordClass::Times,
        WordClass::Object,
        WordClass::Bind,
        WordClass::True,
        WordClass::False,
        WordClass::Empty,
    ];

    /// Surface words of this class.
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            WordClass::Delimiter => &["\n", "。"],
            WordClass::StringStart => &["「"],
            WordClass::StringEnd => &["」"],
            WordClass::EvalStart => &["ここから", "("],
            WordClass::EvalEnd => &["ここまで", ")"],
            WordClass::If => &["もし"],
            WordClass::Then => &["ならば"],
            WordClass::Else => &["違うなら"],
            WordClass::Repeat => &["繰り返す"],
            WordClass::Times => &["回"],
            WordClass::Object => &["を"],
            WordClass::Bind => &["とする"],
            WordClass::True => &["真"],
            WordClass::False => &["偽"],
            WordClass::Empty => &["空"],
        }
    }

    /// True if `text` is one of this class's words.
    #[inline]
    pub fn contains(self, text: &str) -> bool {
        self.words().contains(&text)
    }

    /// The enclosure this class opens, if any.
    ///
    /// Only three classes open enclosures; every other keyword is a plain
    /// split point.
    #[inline]
    pub const fn opens(self) -> Option<EnclosureKind> {
        match self {
            WordClass::StringStart => Some(EnclosureKind::Quote),
            WordClass::EvalStart => Some(EnclosureKind::Evaluate),
            WordClass::If => Some(EnclosureKind::IfBlock),
            _ => None,
        }
    }

    /// Human-readable class name for diagnostics and logs.
    pub const fn display_name(self) -> &'static str {
        match self {
            WordClass::Delimiter => "statement delimiter",
            WordClass::StringStart => "`「`",
            WordClass::StringEnd => "`」`",
            WordClass::EvalStart => "`ここから`",
            WordClass::EvalEnd => "`ここまで`",
            WordClass::If => "`もし`",
            WordClass::Then => "`ならば`",
            WordClass::Else => "`違うなら`",
            WordClass::Repeat => "`繰り返す`",
            WordClass::Times => "`回`",
            WordClass::Object => "`を`",
            WordClass::Bind => "`とする`",
            WordClass::True => "`真`",
            WordClass::False => "`偽`",
            WordClass::Empty => "`空`",
        }
    }
}

/// The three kinds of enclosure whose interior is opaque to outer-level
/// keyword matching.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EnclosureKind {
    /// `「…」`: scanned raw, nothing inside is interpreted.
    Quote,
    /// `ここから…ここまで` / `(…)`: nested enclosures are honored.
    Evaluate,
    /// `もし…ならば…` up to the next statement delimiter; nested
    /// enclosures are honored.
    IfBlock,
}

impl EnclosureKind {
    /// Class of the opening token.
    pub const fn start(self) -> WordClass {
        match self {
            EnclosureKind::Quote => WordClass::StringStart,
            EnclosureKind::Evaluate => WordClass::EvalStart,
            EnclosureKind::IfBlock => WordClass::If,
        }
    }

    /// Class whose token closes the enclosure.
    ///
    /// For an if-block this is the `ならば` that ends the condition; the
    /// block then runs on to the next statement delimiter.
    pub const fn end(self) -> WordClass {
        match self {
            EnclosureKind::Quote => WordClass::StringEnd,
            EnclosureKind::Evaluate => WordClass::EvalEnd,
            EnclosureKind::IfBlock => WordClass::Then,
        }
    }

    /// Whether nested enclosures are recognized while scanning the interior.
    pub const fn escapes_nested(self) -> bool {
        !matches!(self, EnclosureKind::Quote)
    }
}

/// Every keyword string, deduplicated, in class order.
///
/// This is the needle list the tokenizer splits on.
pub fn all_keywords() -> Vec<&'static str> {
    let mut words: Vec<&'static str> = Vec::new();
    for class in WordClass::ALL {
        for word in class.words() {
            if !words.contains(word) {
                words.push(word);
            }
        }
    }
    words
}

/// Every class `text` belongs to, in table order.
pub fn classes_of(text: &str) -> Vec<WordClass> {
    WordClass::ALL
        .into_iter()
        .filter(|class| class.contains(text))
        .collect()
}
