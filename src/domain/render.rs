use crate::domain::DerivedVersion;

/// Formatted version strings for one derivation.
///
/// `version`/`tag` carry the development increment; `release_version`/
/// `release_tag` omit the delimiter and increment entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedVersion {
    pub version: String,
    pub tag: String,
    pub release_version: String,
    pub release_tag: String,
}

/// Render a derived version through the configured templates.
///
/// Substitutes `${major}`/`${minor}`/`${patch}` into the main template and
/// `${increment}` into the increment template. Unmatched placeholders are
/// left verbatim; template validation belongs to the configuration layer,
/// not here.
pub fn render(
    derived: &DerivedVersion,
    main_format: &str,
    increment_format: &str,
    delimiter: &str,
    prefix: &str,
) -> RenderedVersion {
    let main = main_format
        .replace("${major}", &derived.version.major.to_string())
        .replace("${minor}", &derived.version.minor.to_string())
        .replace("${patch}", &derived.version.patch.to_string());

    let increment = increment_format.replace("${increment}", &derived.increment.to_string());

    let version = format!("{}{}{}", main, delimiter, increment);

    RenderedVersion {
        tag: format!("{}{}", prefix, version),
        release_tag: format!("{}{}", prefix, main),
        release_version: main,
        version,
    }
}
