use crate::areas::database::Database;
use crate::areas::locator::RepositoryLocator;
use crate::areas::refs::Refs;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// A repository rooted at the locator's resolved `GIT_DIR`.
///
/// The root is fixed for the lifetime of the value; commands are implemented
/// as `impl Repository` blocks under `crate::commands`.
pub struct Repository {
    locator: RepositoryLocator,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
}

impl Repository {
    pub fn new(locator: RepositoryLocator, writer: Box<dyn std::io::Write>) -> Self {
        let database = Database::new(locator.objects_path().into_boxed_path());
        let refs = Refs::new(locator.root().to_path_buf().into_boxed_path());

        Repository {
            locator,
            writer: RefCell::new(writer),
            database,
            refs,
        }
    }

    pub fn path(&self) -> &Path {
        self.locator.root()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub(crate) fn refs(&self) -> &Refs {
        &self.refs
    }
}
