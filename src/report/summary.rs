use crate::config::PrimaryLanguagePolicy;
use crate::models::{primary_language, ProfileScan};
use crate::report::join_tags;

/// Compact table of every repository in listing order.
pub fn render_summary(scan: &ProfileScan, policy: PrimaryLanguagePolicy) -> String {
    let mut md = String::from("# RepoLens Summary\n\n");

    md.push_str(&format!("Total Repositories: {}\n\n", scan.repositories.len()));
    md.push_str("| Repository | Stars | Language | Frameworks | Tools |\n");
    md.push_str("|------------|-------|----------|------------|-------|\n");

    for repo in &scan.repositories {
        let analysis = scan.analyses.get(&repo.name);
        let language =
            primary_language(repo, scan.languages.get(&repo.name), policy).unwrap_or("N/A");
        let frameworks = analysis
            .map(|a| join_tags(&a.frameworks))
            .unwrap_or_else(|| "-".to_string());
        let tools = analysis
            .map(|a| join_tags(&a.tools))
            .unwrap_or_else(|| "-".to_string());

        md.push_str(&format!(
            "| [{}]({}) | {} | {} | {} | {} |\n",
            repo.name, repo.html_url, repo.stargazers_count, language, frameworks, tools
        ));
    }

    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures;

    #[test]
    fn test_summary_keeps_listing_order() {
        let md = render_summary(&fixtures::scan(), PrimaryLanguagePolicy::FirstListed);
        let rows: Vec<_> = md.lines().filter(|l| l.starts_with("| [")).collect();

        assert!(md.starts_with("# RepoLens Summary\n\nTotal Repositories: 3\n"));
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[0],
            "| [alpha](https://github.com/octo/alpha) | 3 | TypeScript | react | typescript, docker |"
        );
        assert_eq!(
            rows[1],
            "| [beta](https://github.com/octo/beta) | 10 | Python | django | docker, github-actions |"
        );
        assert_eq!(rows[2], "| [gamma](https://github.com/octo/gamma) | 1 | N/A | - | - |");
    }
}
