use std::collections::HashSet;

/// File endings the analyzer always wants: sources plus the build metadata
/// needed to configure a workspace.
const INCLUDE_SUFFIXES: &[&str] = &[
    ".java",
    "/pom.xml",
    ".gradle",
    ".properties",
    "/javaconfig.json",
    "/AndroidManifest.xml", // sometimes needed by Gradle scripts
    ".groovy",              // sometimes needed if Gradle plugins run directly from source
];

const INCLUDE_SUBSTRINGS: &[&str] = &[
    "gradle", // keep anything in a Gradle folder
    "/buildSrc/",
];

const EXCLUDE_SUBSTRINGS: &[&str] = &[
    "/src/main/resources/",
    "/src/test/resources/",
    "/META-INF/",
];

/// Whether a URI names a file relevant to analysis.
pub fn is_relevant_file(uri: &str) -> bool {
    let included = INCLUDE_SUFFIXES.iter().any(|suffix| uri.ends_with(suffix))
        || INCLUDE_SUBSTRINGS.iter().any(|sub| uri.contains(sub));
    let excluded =
        !uri.contains("/buildSrc/") && EXCLUDE_SUBSTRINGS.iter().any(|sub| uri.contains(sub));
    included && !excluded && !uri.ends_with(".jar")
}

/// Filters `uris` down to the relevant files.
pub fn relevant_files(uris: impl IntoIterator<Item = String>) -> HashSet<String> {
    uris.into_iter().filter(|uri| is_relevant_file(uri)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sources_and_build_files_are_relevant() {
        assert!(is_relevant_file("file:///p/src/main/java/Foo.java"));
        assert!(is_relevant_file("file:///p/pom.xml"));
        assert!(is_relevant_file("file:///p/build.gradle"));
        assert!(is_relevant_file("file:///p/gradle/wrapper/gradle-wrapper.properties"));
    }

    #[test]
    fn resources_and_archives_are_excluded() {
        assert!(!is_relevant_file("file:///p/src/main/resources/app.properties"));
        assert!(!is_relevant_file("file:///p/META-INF/MANIFEST.MF"));
        assert!(!is_relevant_file("file:///p/libs/dep.jar"));
        assert!(!is_relevant_file("file:///p/src/Main.kt"));
    }

    #[test]
    fn build_src_overrides_the_resource_exclusion() {
        assert!(is_relevant_file(
            "file:///p/buildSrc/src/main/resources/plugin.properties"
        ));
    }

    #[test]
    fn relevant_files_filters_a_listing() {
        let uris = vec![
            "file:///p/A.java".to_string(),
            "file:///p/a.jar".to_string(),
            "file:///p/settings.gradle".to_string(),
        ];
        let relevant = relevant_files(uris);
        assert_eq!(relevant.len(), 2);
        assert!(relevant.contains("file:///p/A.java"));
        assert!(relevant.contains("file:///p/settings.gradle"));
    }
}
