//! Full Markdown report: overview, ranked distributions, repository table
//! and tag index.

use crate::config::PrimaryLanguagePolicy;
use crate::models::{primary_language, ProfileScan, Repository};
use crate::report::chart::{render_bar_chart, ChartItem};
use crate::report::{
    all_tags, creation_range, format_date, framework_distribution, join_tags,
    language_distribution, tool_distribution,
};

pub struct Dashboard<'a> {
    scan: &'a ProfileScan,
    policy: PrimaryLanguagePolicy,
}

impl<'a> Dashboard<'a> {
    pub fn new(scan: &'a ProfileScan) -> Self {
        Self {
            scan,
            policy: PrimaryLanguagePolicy::default(),
        }
    }

    pub fn with_language_policy(mut self, policy: PrimaryLanguagePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn render(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("# {}'s GitHub Profile Report\n\n", self.scan.username));
        md.push_str(&format!(
            "> Generated on {}\n\n",
            self.scan.scanned_at.format("%B %-d, %Y")
        ));

        self.push_overview(&mut md);

        push_chart_section(
            &mut md,
            "Languages",
            &language_distribution(self.scan, self.policy),
        );
        push_chart_section(&mut md, "Frameworks", &framework_distribution(self.scan));
        push_chart_section(&mut md, "Tools & Technologies", &tool_distribution(self.scan));

        self.push_repository_table(&mut md);
        self.push_tag_index(&mut md);

        md
    }

    fn push_overview(&self, md: &mut String) {
        md.push_str("## Overview\n\n");
        md.push_str(&format!(
            "- **Total Repositories:** {}\n",
            self.scan.repositories.len()
        ));
        md.push_str(&format!("- **Total Stars:** ⭐ {}\n", self.scan.total_stars()));

        let range = creation_range(self.scan)
            .map(|(oldest, newest)| format!("{} - {}", format_date(&oldest), format_date(&newest)))
            .unwrap_or_else(|| "N/A".to_string());
        md.push_str(&format!("- **Date Range:** {}\n\n", range));
    }

    fn push_repository_table(&self, md: &mut String) {
        md.push_str("## Repositories\n\n");
        md.push_str("| Repository | ⭐ Stars | Language | Frameworks | Tools | Created | Updated |\n");
        md.push_str("|------------|---------|----------|------------|-------|---------|---------|\n");

        for repo in self.sorted_by_stars() {
            let analysis = self.scan.analyses.get(&repo.name);
            let language =
                primary_language(repo, self.scan.languages.get(&repo.name), self.policy)
                    .unwrap_or("N/A");
            let frameworks = analysis
                .map(|a| join_tags(&a.frameworks))
                .unwrap_or_else(|| "-".to_string());
            let tools = analysis
                .map(|a| join_tags(&a.tools))
                .unwrap_or_else(|| "-".to_string());

            md.push_str(&format!(
                "| [{}]({}) | {} | {} | {} | {} | {} | {} |\n",
                repo.name,
                repo.html_url,
                repo.stargazers_count,
                language,
                frameworks,
                tools,
                format_date(&repo.created_at),
                format_date(&repo.updated_at),
            ));
        }
    }

    fn push_tag_index(&self, md: &mut String) {
        let tags = all_tags(self.scan);
        if tags.is_empty() {
            return;
        }

        md.push_str("\n## All Tags\n\n");
        let rendered: Vec<String> = tags.iter().map(|t| format!("`{}`", t)).collect();
        md.push_str(&rendered.join(" • "));
        md.push('\n');
    }

    /// Highest star count first; equal counts keep listing order.
    fn sorted_by_stars(&self) -> Vec<&'a Repository> {
        let mut repos: Vec<&Repository> = self.scan.repositories.iter().collect();
        repos.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
        repos
    }
}

fn push_chart_section(md: &mut String, title: &str, items: &[ChartItem]) {
    if items.is_empty() {
        return;
    }
    md.push_str(&format!("## {}\n\n", title));
    md.push_str("```\n");
    md.push_str(&render_bar_chart(items));
    md.push_str("```\n\n");
}
