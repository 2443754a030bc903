use crate::config::CopySettings;
use crate::core::duplication::{Duplicate, Shared};
use crate::core::narrator::Narrator;
use crate::domain::model::{CopyReport, ImmutableFieldReport, MutableFieldReport};
use crate::domain::ports::Demonstration;
use crate::utils::error::{DemoError, Result};
use async_trait::async_trait;
use std::rc::Rc;

/// Object with a single immutable numeric field held by pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct Holder {
    pub x: Rc<i64>,
}

impl Holder {
    pub fn new(x: i64) -> Self {
        Self { x: Rc::new(x) }
    }

    pub fn value(&self) -> i64 {
        *self.x
    }

    /// Points the field at a new value. Copies keep the old pointer.
    pub fn rebind(&mut self, x: i64) {
        self.x = Rc::new(x);
    }

    pub fn shares_value_with(&self, other: &Holder) -> bool {
        Rc::ptr_eq(&self.x, &other.x)
    }
}

impl Duplicate for Holder {
    fn deep_copy(&self) -> Self {
        Self {
            x: self.x.deep_copy(),
        }
    }
}

/// Object holding a reference to a mutable sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
    pub data: Shared<Vec<i64>>,
}

impl Container {
    pub fn new(items: Vec<i64>) -> Self {
        Self {
            data: Shared::new(items),
        }
    }

    pub fn items(&self) -> Vec<i64> {
        self.data.snapshot()
    }

    pub fn shares_data_with(&self, other: &Container) -> bool {
        self.data.ptr_eq(&other.data)
    }
}

impl Duplicate for Container {
    fn deep_copy(&self) -> Self {
        Self {
            data: self.data.deep_copy(),
        }
    }
}

/// Rebinds the original's field to `initial + 1`, then `initial + 2`, and
/// reports what each copy sees. Fails before narrating if those overflow.
pub fn immutable_field_demo(initial: i64, narrator: &Narrator) -> Result<ImmutableFieldReport> {
    let overflow = || DemoError::InvalidConfigValueError {
        field: "initial".to_string(),
        value: initial.to_string(),
        reason: "initial + 2 does not fit in an i64".to_string(),
    };
    let first_rebind = initial.checked_add(1).ok_or_else(overflow)?;
    let second_rebind = initial.checked_add(2).ok_or_else(overflow)?;

    let mut a = Holder::new(initial);
    let b = a.shallow_copy();
    let shallow_shared_value = b.shares_value_with(&a);

    let shallow_before = b.value();
    narrator.say(format!("b.x before change: {}", shallow_before));

    a.rebind(first_rebind);
    let shallow_after_rebind = b.value();
    narrator.say(format!("b.x after changing a.x: {}", shallow_after_rebind));

    let c = a.deep_copy();
    let deep_shared_value = c.shares_value_with(&a);
    let deep_after_copy = c.value();
    narrator.say(format!("c.x after deep_copy: {}", deep_after_copy));

    a.rebind(second_rebind);
    let deep_after_rebind = c.value();
    narrator.say(format!("c.x after changing a.x: {}", deep_after_rebind));

    tracing::debug!(
        shallow_shared_value,
        deep_shared_value,
        "Immutable field copies inspected"
    );

    Ok(ImmutableFieldReport {
        shallow_before,
        shallow_after_rebind,
        deep_after_copy,
        deep_after_rebind,
        shallow_shared_value,
        deep_shared_value,
    })
}

pub fn mutable_field_demo(items: Vec<i64>, appended: i64, narrator: &Narrator) -> MutableFieldReport {
    let original = Container::new(items);
    let shallow = original.shallow_copy();
    let deep = original.deep_copy();

    original.data.push(appended);

    let report = MutableFieldReport {
        original: original.items(),
        shallow: shallow.items(),
        deep: deep.items(),
        shallow_shares_data: shallow.shares_data_with(&original),
        deep_shares_data: deep.shares_data_with(&original),
    };

    narrator.say(format!("original.data: {:?}", report.original));
    narrator.say(format!("shallow.data: {:?}", report.shallow));
    narrator.say(format!("deep.data: {:?}", report.deep));

    report
}

pub struct CopySemanticsDemo {
    settings: CopySettings,
}

impl CopySemanticsDemo {
    pub fn new(settings: CopySettings) -> Self {
        Self { settings }
    }
}

#[async_trait(?Send)]
impl Demonstration for CopySemanticsDemo {
    type Report = CopyReport;

    fn title(&self) -> &str {
        "Shallow vs deep copy"
    }

    async fn run(&mut self, narrator: &Narrator) -> Result<CopyReport> {
        let immutable_field = immutable_field_demo(self.settings.initial, narrator)?;

        narrator.blank();
        narrator.say("---");
        narrator.blank();

        let mutable_field =
            mutable_field_demo(self.settings.items.clone(), self.settings.append, narrator);

        Ok(CopyReport {
            immutable_field,
            mutable_field,
        })
    }
}
