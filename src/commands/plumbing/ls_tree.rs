use crate::areas::database::ListingEntry;
use crate::areas::repository::Repository;
use colored::Colorize;

impl Repository {
    /// List every loose object as `<hash>\t<type>\t<body>`, sorted by hash.
    ///
    /// Objects that cannot be read or decoded are reported and skipped; the
    /// command fails once the listing is complete if any were skipped.
    pub fn ls_tree(&self) -> anyhow::Result<()> {
        let report = self.database().list_all().partition();

        let mut entries = report.entries;
        entries.sort_by(|a, b| a.hash().cmp(b.hash()));

        writeln!(self.writer(), "{}", "hash\ttype\tbody".bold())?;
        for entry in &entries {
            writeln!(self.writer(), "{}", format_entry(entry))?;
        }
        self.writer().flush()?;

        let failed = report.failures.len();
        for failure in report.failures {
            tracing::warn!("skipped object: {:#}", anyhow::Error::new(failure));
        }

        if failed > 0 {
            anyhow::bail!(
                "{} of {} objects could not be listed",
                failed,
                failed + entries.len()
            );
        }

        Ok(())
    }
}

fn format_entry(entry: &ListingEntry) -> String {
    let body = String::from_utf8_lossy(entry.body());

    format!(
        "{}\t{}\t{}",
        entry.hash().yellow(),
        entry.object_type(),
        body.trim_end_matches('\n')
    )
}
