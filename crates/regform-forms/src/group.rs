//! Control groups and the control tree.
//!
//! A form is a tree: leaves are [`FormControl`]s and inner nodes are
//! [`FormGroup`]s, joined by the tagged variant [`AbstractControl`]. Groups
//! aggregate their children:
//!
//! - valid iff every child is valid
//! - dirty iff any child is dirty
//! - touched iff any child is touched
//!
//! Controls are addressed by dot-separated paths relative to the group, e.g.
//! `"name.firstName"`.

use std::collections::BTreeMap;

use regform_core::{FormError, FormResult, ValidationError};

use crate::control::{ControlStatus, FormControl};
use crate::validators::ControlError;

/// A node of the control tree.
#[derive(Debug)]
pub enum AbstractControl {
    /// A leaf input.
    Control(FormControl),
    /// A nested group.
    Group(FormGroup),
}

impl AbstractControl {
    /// Returns the node's own name.
    pub fn name(&self) -> &str {
        match self {
            Self::Control(c) => c.name(),
            Self::Group(g) => g.name(),
        }
    }

    /// Returns `true` if this node and all its descendants are valid.
    pub fn is_valid(&self) -> bool {
        match self {
            Self::Control(c) => c.is_valid(),
            Self::Group(g) => g.is_valid(),
        }
    }

    /// Returns `true` if this node or any descendant is dirty.
    pub fn is_dirty(&self) -> bool {
        match self {
            Self::Control(c) => c.is_dirty(),
            Self::Group(g) => g.is_dirty(),
        }
    }

    /// Returns `true` if this node or any descendant is touched.
    pub fn is_touched(&self) -> bool {
        match self {
            Self::Control(c) => c.is_touched(),
            Self::Group(g) => g.is_touched(),
        }
    }

    /// Returns the node's value: a string for controls, an object for groups.
    pub fn value(&self) -> serde_json::Value {
        match self {
            Self::Control(c) => serde_json::Value::String(c.value().to_string()),
            Self::Group(g) => g.value(),
        }
    }

    /// Resets this node and every descendant.
    pub fn reset(&mut self) {
        match self {
            Self::Control(c) => c.reset(),
            Self::Group(g) => g.reset(),
        }
    }

    /// Marks this node and every descendant as touched.
    pub fn mark_all_as_touched(&mut self) {
        match self {
            Self::Control(c) => c.mark_as_touched(),
            Self::Group(g) => g.mark_all_as_touched(),
        }
    }

    /// Returns the leaf control, if this node is one.
    pub const fn as_control(&self) -> Option<&FormControl> {
        match self {
            Self::Control(c) => Some(c),
            Self::Group(_) => None,
        }
    }

    /// Returns the group, if this node is one.
    pub const fn as_group(&self) -> Option<&FormGroup> {
        match self {
            Self::Control(_) => None,
            Self::Group(g) => Some(g),
        }
    }
}

/// A named, ordered collection of controls and nested groups.
///
/// # Examples
///
/// ```
/// use regform_forms::control::FormControl;
/// use regform_forms::group::FormGroup;
/// use regform_forms::validators::RequiredValidator;
///
/// let mut form = FormGroup::new("root")
///     .group(FormGroup::new("name").control(FormControl::new("first", "").validator(RequiredValidator)))
///     .control(FormControl::new("email", ""));
/// assert!(!form.is_valid());
///
/// form.input("name.first", "Ada").unwrap();
/// assert!(form.is_valid());
/// assert_eq!(form.value()["name"]["first"], "Ada");
/// ```
#[derive(Debug)]
pub struct FormGroup {
    name: String,
    children: Vec<AbstractControl>,
}

impl FormGroup {
    /// Creates an empty group.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Appends a leaf control.
    #[must_use]
    pub fn control(mut self, control: FormControl) -> Self {
        self.children.push(AbstractControl::Control(control));
        self
    }

    /// Appends a nested group.
    #[must_use]
    pub fn group(mut self, group: Self) -> Self {
        self.children.push(AbstractControl::Group(group));
        self
    }

    /// Returns the group's own name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the direct children in declaration order.
    pub fn children(&self) -> &[AbstractControl] {
        &self.children
    }

    /// Looks up a node by dot-separated path.
    pub fn get(&self, path: &str) -> Option<&AbstractControl> {
        let (head, rest) = split_path(path);
        let child = self.children.iter().find(|c| c.name() == head)?;
        match (rest, child) {
            (None, _) => Some(child),
            (Some(rest), AbstractControl::Group(g)) => g.get(rest),
            (Some(_), AbstractControl::Control(_)) => None,
        }
    }

    /// Looks up a node mutably by dot-separated path.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut AbstractControl> {
        let (head, rest) = split_path(path);
        let child = self.children.iter_mut().find(|c| c.name() == head)?;
        match rest {
            None => Some(child),
            Some(rest) => match child {
                AbstractControl::Group(g) => g.get_mut(rest),
                AbstractControl::Control(_) => None,
            },
        }
    }

    /// Looks up a leaf control by path.
    pub fn get_control(&self, path: &str) -> Option<&FormControl> {
        self.get(path).and_then(AbstractControl::as_control)
    }

    /// Looks up a leaf control mutably by path.
    pub fn get_control_mut(&mut self, path: &str) -> Option<&mut FormControl> {
        match self.get_mut(path)? {
            AbstractControl::Control(c) => Some(c),
            AbstractControl::Group(_) => None,
        }
    }

    /// Looks up a nested group by path.
    pub fn get_group(&self, path: &str) -> Option<&Self> {
        self.get(path).and_then(AbstractControl::as_group)
    }

    /// Returns `true` if every descendant control is valid.
    pub fn is_valid(&self) -> bool {
        self.children.iter().all(AbstractControl::is_valid)
    }

    /// Returns `true` if any descendant control is invalid.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Returns the aggregated status.
    pub fn status(&self) -> ControlStatus {
        if self.is_valid() {
            ControlStatus::Valid
        } else {
            ControlStatus::Invalid
        }
    }

    /// Returns `true` if any descendant control is dirty.
    pub fn is_dirty(&self) -> bool {
        self.children.iter().any(AbstractControl::is_dirty)
    }

    /// Returns `true` if no descendant control is dirty.
    pub fn is_pristine(&self) -> bool {
        !self.is_dirty()
    }

    /// Returns `true` if any descendant control is touched.
    pub fn is_touched(&self) -> bool {
        self.children.iter().any(AbstractControl::is_touched)
    }

    /// Returns `true` if no descendant control is touched.
    pub fn is_untouched(&self) -> bool {
        !self.is_touched()
    }

    /// Returns the nested value snapshot as a JSON object.
    pub fn value(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .children
            .iter()
            .map(|c| (c.name().to_string(), c.value()))
            .collect();
        serde_json::Value::Object(map)
    }

    /// Returns every leaf control with its full path, in declaration order.
    pub fn controls(&self) -> Vec<(String, &FormControl)> {
        let mut out = Vec::new();
        self.collect_controls("", &mut out);
        out
    }

    fn collect_controls<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a FormControl)>) {
        for child in &self.children {
            let path = if prefix.is_empty() {
                child.name().to_string()
            } else {
                format!("{prefix}.{}", child.name())
            };
            match child {
                AbstractControl::Control(c) => out.push((path, c)),
                AbstractControl::Group(g) => g.collect_controls(&path, out),
            }
        }
    }

    /// Returns the active errors of every invalid control, keyed by path.
    pub fn errors(&self) -> BTreeMap<String, Vec<ControlError>> {
        self.controls()
            .into_iter()
            .filter(|(_, c)| c.is_invalid())
            .map(|(path, c)| (path, c.errors().to_vec()))
            .collect()
    }

    /// Returns the active errors as JSON: `{path: {code: payload}}`.
    ///
    /// Only invalid controls appear; a valid form yields an empty object.
    pub fn errors_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .errors()
            .into_iter()
            .map(|(path, errors)| {
                let by_code: serde_json::Map<String, serde_json::Value> = errors
                    .iter()
                    .map(|e| (e.kind().code().to_string(), e.payload()))
                    .collect();
                (path, serde_json::Value::Object(by_code))
            })
            .collect();
        serde_json::Value::Object(map)
    }

    /// Returns a compound validation error if any control is invalid.
    pub fn validation_error(&self) -> Option<ValidationError> {
        let field_errors: BTreeMap<String, Vec<ValidationError>> = self
            .controls()
            .into_iter()
            .filter(|(_, c)| c.is_invalid())
            .map(|(path, c)| (path, c.validation_errors()))
            .collect();
        if field_errors.is_empty() {
            None
        } else {
            Some(ValidationError::with_field_errors(field_errors))
        }
    }

    /// Applies a user edit to the control at `path`.
    pub fn input(&mut self, path: &str, value: impl Into<String>) -> FormResult<()> {
        let value = value.into();
        let control = self
            .get_control_mut(path)
            .ok_or_else(|| FormError::UnknownControl(path.to_string()))?;
        if !control.accepts(&value) {
            return Err(FormError::InvalidChoice {
                field: path.to_string(),
                value,
            });
        }
        control.input(value);
        Ok(())
    }

    /// Marks the control at `path` as touched.
    pub fn blur(&mut self, path: &str) -> FormResult<()> {
        self.get_control_mut(path)
            .ok_or_else(|| FormError::UnknownControl(path.to_string()))?
            .mark_as_touched();
        Ok(())
    }

    /// Resets every descendant to its initial value, pristine and untouched.
    pub fn reset(&mut self) {
        self.children.iter_mut().for_each(AbstractControl::reset);
    }

    /// Marks every descendant control as touched.
    pub fn mark_all_as_touched(&mut self) {
        self.children
            .iter_mut()
            .for_each(AbstractControl::mark_all_as_touched);
    }
}

fn split_path(path: &str) -> (&str, Option<&str>) {
    match path.split_once('.') {
        Some((head, rest)) => (head, Some(rest)),
        None => (path, None),
    }
}
