//! Named field updates applied onto a [`Config`].
//!
//! Every setting the resolver knows about is a [`Field`], and every change
//! to a field is a [`ConfigOption`] carrying the typed value. The set is
//! closed, so the precedence algorithm can be checked exhaustively.

use std::fmt;

use super::model::Config;

/// Identifies one field of [`Config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    File,
    Format,
    Sort,
    Reverse,
    NoHeaders,
    ShowFooters,
    Limit,
    Output,
    MatchingGroups,
    Filters,
    Pos,
    NoSavePos,
    Percentiles,
    BundleWhereIn,
    BundleValues,
    NoAbstract,
    PaginationLimit,
}

impl Field {
    /// Every field in canonical order.
    ///
    /// Option lists built by the CLI and file layers follow this order.
    pub const ALL: [Self; 17] = [
        Self::File,
        Self::Format,
        Self::Sort,
        Self::Reverse,
        Self::NoHeaders,
        Self::ShowFooters,
        Self::Limit,
        Self::Output,
        Self::MatchingGroups,
        Self::Filters,
        Self::Pos,
        Self::NoSavePos,
        Self::Percentiles,
        Self::BundleWhereIn,
        Self::BundleValues,
        Self::NoAbstract,
        Self::PaginationLimit,
    ];

    /// Key used for this field in the configuration file.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Format => "format",
            Self::Sort => "sort",
            Self::Reverse => "reverse",
            Self::NoHeaders => "no_headers",
            Self::ShowFooters => "show_footers",
            Self::Limit => "limit",
            Self::Output => "output",
            Self::MatchingGroups => "matching_groups",
            Self::Filters => "filters",
            Self::Pos => "pos",
            Self::NoSavePos => "no_save_pos",
            Self::Percentiles => "percentiles",
            Self::BundleWhereIn => "bundle_where_in",
            Self::BundleValues => "bundle_values",
            Self::NoAbstract => "no_abstract",
            Self::PaginationLimit => "pagination_limit",
        }
    }

    /// Long command-line flag that sets this field.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::File => "--file",
            Self::Format => "--format",
            Self::Sort => "--sort",
            Self::Reverse => "--reverse",
            Self::NoHeaders => "--noheaders",
            Self::ShowFooters => "--show-footers",
            Self::Limit => "--limit",
            Self::Output => "--output",
            Self::MatchingGroups => "--matching-groups",
            Self::Filters => "--filters",
            Self::Pos => "--pos",
            Self::NoSavePos => "--nosave-pos",
            Self::Percentiles => "--percentiles",
            Self::BundleWhereIn => "--bundle-where-in",
            Self::BundleValues => "--bundle-values",
            Self::NoAbstract => "--noabstract",
            Self::PaginationLimit => "--page",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single typed update to one [`Config`] field.
///
/// Constructing an option never fails. Semantic checks (sort allow-list,
/// percentile range) happen in [`validate`](super::validate) and in the
/// resolver, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOption {
    File(String),
    Format(String),
    Sort(String),
    Reverse(bool),
    NoHeaders(bool),
    ShowFooters(bool),
    Limit(i64),
    Output(String),
    MatchingGroups(String),
    Filters(String),
    Pos(String),
    NoSavePos(bool),
    Percentiles(Vec<u8>),
    BundleWhereIn(bool),
    BundleValues(bool),
    NoAbstract(bool),
    PaginationLimit(i64),
}

impl ConfigOption {
    /// The field this option sets.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::File(_) => Field::File,
            Self::Format(_) => Field::Format,
            Self::Sort(_) => Field::Sort,
            Self::Reverse(_) => Field::Reverse,
            Self::NoHeaders(_) => Field::NoHeaders,
            Self::ShowFooters(_) => Field::ShowFooters,
            Self::Limit(_) => Field::Limit,
            Self::Output(_) => Field::Output,
            Self::MatchingGroups(_) => Field::MatchingGroups,
            Self::Filters(_) => Field::Filters,
            Self::Pos(_) => Field::Pos,
            Self::NoSavePos(_) => Field::NoSavePos,
            Self::Percentiles(_) => Field::Percentiles,
            Self::BundleWhereIn(_) => Field::BundleWhereIn,
            Self::BundleValues(_) => Field::BundleValues,
            Self::NoAbstract(_) => Field::NoAbstract,
            Self::PaginationLimit(_) => Field::PaginationLimit,
        }
    }

    /// Sets the named field on `config`, leaving every other field untouched.
    pub fn apply(&self, config: &mut Config) {
        match self {
            Self::File(v) => config.file.clone_from(v),
            Self::Format(v) => config.format.clone_from(v),
            Self::Sort(v) => config.sort.clone_from(v),
            Self::Reverse(v) => config.reverse = *v,
            Self::NoHeaders(v) => config.no_headers = *v,
            Self::ShowFooters(v) => config.show_footers = *v,
            Self::Limit(v) => config.limit = *v,
            Self::Output(v) => config.output.clone_from(v),
            Self::MatchingGroups(v) => config.matching_groups.clone_from(v),
            Self::Filters(v) => config.filters.clone_from(v),
            Self::Pos(v) => config.pos.clone_from(v),
            Self::NoSavePos(v) => config.no_save_pos = *v,
            Self::Percentiles(v) => config.percentiles.clone_from(v),
            Self::BundleWhereIn(v) => config.bundle_where_in = *v,
            Self::BundleValues(v) => config.bundle_values = *v,
            Self::NoAbstract(v) => config.no_abstract = *v,
            Self::PaginationLimit(v) => config.pagination_limit = *v,
        }
    }

    /// Returns the option that reproduces `field`'s current value in `config`.
    #[must_use]
    pub fn from_config(field: Field, config: &Config) -> Self {
        match field {
            Field::File => Self::File(config.file.clone()),
            Field::Format => Self::Format(config.format.clone()),
            Field::Sort => Self::Sort(config.sort.clone()),
            Field::Reverse => Self::Reverse(config.reverse),
            Field::NoHeaders => Self::NoHeaders(config.no_headers),
            Field::ShowFooters => Self::ShowFooters(config.show_footers),
            Field::Limit => Self::Limit(config.limit),
            Field::Output => Self::Output(config.output.clone()),
            Field::MatchingGroups => Self::MatchingGroups(config.matching_groups.clone()),
            Field::Filters => Self::Filters(config.filters.clone()),
            Field::Pos => Self::Pos(config.pos.clone()),
            Field::NoSavePos => Self::NoSavePos(config.no_save_pos),
            Field::Percentiles => Self::Percentiles(config.percentiles.clone()),
            Field::BundleWhereIn => Self::BundleWhereIn(config.bundle_where_in),
            Field::BundleValues => Self::BundleValues(config.bundle_values),
            Field::NoAbstract => Self::NoAbstract(config.no_abstract),
            Field::PaginationLimit => Self::PaginationLimit(config.pagination_limit),
        }
    }
}

/// Applies `options` onto `config` in order; later options win.
pub fn apply_all(config: &mut Config, options: &[ConfigOption]) {
    for option in options {
        option.apply(config);
    }
}
