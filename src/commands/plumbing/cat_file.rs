use crate::areas::repository::Repository;
use crate::artifacts::objects::object_header::ObjectHeader;
use anyhow::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatFileMode {
    /// Print the object type parsed from the header
    Type,
    /// Print the raw object body
    #[default]
    Body,
}

impl Repository {
    /// Print each object in the order given, stopping at the first one that
    /// cannot be read.
    pub fn cat_file(&self, hashes: &[String], mode: CatFileMode) -> anyhow::Result<()> {
        for hash in hashes {
            let object = self
                .database()
                .get(hash)
                .with_context(|| format!("Error reading hash {}", hash))?;

            match mode {
                CatFileMode::Type => {
                    let header = ObjectHeader::parse(object.header());
                    writeln!(self.writer(), "{}", header.object_type())?;
                }
                CatFileMode::Body => self.writer().write_all(object.body())?,
            }
        }

        self.writer().flush()?;

        Ok(())
    }
}
