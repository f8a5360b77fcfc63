use std::borrow::Cow;

/// The label a stopwatch prefixes its report lines with.
///
/// An activity is either a non-empty label or suppressed. A stopwatch with a suppressed
/// activity still measures time but never writes a report line. Empty labels are normalized
/// to suppressed on creation, so there is exactly one way to represent "no output".
///
/// # Examples
///
/// ```
/// use scoped_stopwatch::Activity;
///
/// assert_eq!(Activity::new("parse").label(), Some("parse"));
/// assert!(Activity::new("").is_suppressed());
/// assert!(Activity::from(None).is_suppressed());
/// assert_eq!(Activity::default().label(), Some("Stopwatch"));
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Activity<'a> {
    label: Option<Cow<'a, str>>,
}

impl<'a> Activity<'a> {
    /// The label used when the caller does not name the activity.
    pub const DEFAULT_LABEL: &'static str = "Stopwatch";

    /// Creates an activity with the given label, or a suppressed one if the label is empty.
    #[must_use]
    pub fn new(label: impl Into<Cow<'a, str>>) -> Self {
        let label = label.into();

        Self {
            label: (!label.is_empty()).then_some(label),
        }
    }

    /// Creates an activity that never produces report lines.
    #[must_use]
    pub const fn suppressed() -> Self {
        Self { label: None }
    }

    /// The label, or `None` if reporting is suppressed.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether report lines are suppressed for this activity.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        self.label.is_none()
    }
}

impl Default for Activity<'_> {
    fn default() -> Self {
        Self {
            label: Some(Cow::Borrowed(Self::DEFAULT_LABEL)),
        }
    }
}

impl<'a> From<&'a str> for Activity<'a> {
    fn from(label: &'a str) -> Self {
        Self::new(label)
    }
}

impl From<String> for Activity<'_> {
    fn from(label: String) -> Self {
        Self::new(label)
    }
}

impl<'a> From<Cow<'a, str>> for Activity<'a> {
    fn from(label: Cow<'a, str>) -> Self {
        Self::new(label)
    }
}

impl<'a> From<Option<&'a str>> for Activity<'a> {
    fn from(label: Option<&'a str>) -> Self {
        match label {
            Some(label) => Self::new(label),
            None => Self::suppressed(),
        }
    }
}
