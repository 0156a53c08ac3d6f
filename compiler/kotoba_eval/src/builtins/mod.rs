//! Built-in functions.
//!
//! A built-in is a name, the case particles that mark its arguments, and
//! a procedure. Calls are resolved by the call production from the
//! statement text (see `grammar::call`); the procedure receives the
//! evaluated arguments keyed by particle.

mod compare;
mod display;

use rustc_hash::FxHashMap;

use crate::context::Context;
use crate::errors::{missing_slot, EvalError, EvalResult};
use crate::Value;

/// Signature of a built-in's procedure.
pub type BuiltinFn = fn(&Arguments, &mut Context) -> EvalResult;

/// A registered built-in function.
#[derive(Clone)]
pub struct Builtin {
    name: String,
    particles: Vec<String>,
    procedure: BuiltinFn,
}

impl Builtin {
    pub fn new(name: impl Into<String>, particles: &[&str], procedure: BuiltinFn) -> Self {
        Builtin {
            name: name.into(),
            particles: particles.iter().map(|p| (*p).to_string()).collect(),
            procedure,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Case particles, in declaration order.
    #[inline]
    pub fn particles(&self) -> &[String] {
        &self.particles
    }

    #[inline]
    pub fn procedure(&self) -> BuiltinFn {
        self.procedure
    }
}

impl std::fmt::Debug for Builtin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builtin")
            .field("name", &self.name)
            .field("particles", &self.particles)
            .finish_non_exhaustive()
    }
}

/// Evaluated arguments keyed by case particle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Arguments {
    slots: FxHashMap<String, Value>,
}

impl Arguments {
    pub fn new() -> Self {
        Arguments::default()
    }

    /// Fill a slot. A particle given twice keeps the later value.
    pub fn insert(&mut self, particle: impl Into<String>, value: Value) {
        self.slots.insert(particle.into(), value);
    }

    #[inline]
    pub fn get(&self, particle: &str) -> Option<&Value> {
        self.slots.get(particle)
    }

    /// The value for `particle`, or an argument error if the slot is empty.
    pub fn require(&self, particle: &str) -> Result<&Value, EvalError> {
        self.get(particle).ok_or_else(|| missing_slot(particle))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// The pre-registered built-ins, in registration order.
pub fn standard() -> Vec<Builtin> {
    vec![
        Builtin::new("表示", &["を", "に"], display::display),
        Builtin::new("デバッグ表示", &["を"], display::debug_display),
        Builtin::new("小さい", &["が", "より"], compare::less),
        Builtin::new("大きい", &["が", "より"], compare::greater),
    ]
}
