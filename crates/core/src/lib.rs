//! Compiles utility class names into stylesheet text.
//!
//! Class names are added to one of two partitions: the critical sheet that
//! is inlined into pages, and the external sheet that is loaded afterwards.
//! Each partition renders independently.
//!
//! ```
//! use tailor_core::{Compiler, Partition};
//!
//! let mut compiler = Compiler::new(true);
//! compiler.add_classes(["p-4"], Partition::Critical);
//! assert_eq!(compiler.get_stylesheet(Partition::Critical), ".p-4 {padding: 1rem;}");
//! ```

mod parser;
pub mod resolve;
pub mod tables;
mod tree;
pub mod units;

use log::debug;

pub use parser::{ClassName, escape_class};
pub use resolve::{Candidate, Declarations, ResolvedProperty, resolve};
pub use tree::{Body, Layout, Rule, RuleTree, Sheet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Partition {
    Critical,
    External,
}

impl From<bool> for Partition {
    fn from(critical: bool) -> Self {
        if critical {
            Partition::Critical
        } else {
            Partition::External
        }
    }
}

#[derive(Debug, Clone)]
pub struct Compiler {
    layout: Layout,
    critical: Sheet,
    external: Sheet,
}

impl Compiler {
    pub fn new(minified: bool) -> Self {
        Self {
            layout: Layout::new(minified),
            critical: Sheet::default(),
            external: Sheet::default(),
        }
    }

    pub fn is_minified(&self) -> bool {
        self.layout.is_minified()
    }

    /// Adds class names to a partition. Names already added to that
    /// partition are skipped; unknown names are logged and skipped.
    pub fn add_classes<I>(&mut self, classes: I, partition: impl Into<Partition>)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let partition = partition.into();
        let layout = self.layout;
        let sheet = self.sheet_mut(partition);
        let before = sheet.seen.len();
        for class_name in classes {
            parser::compile_class(sheet, class_name.as_ref(), layout);
        }
        debug!(
            "{:?} partition: {} new class names",
            partition,
            sheet.seen.len() - before
        );
    }

    /// Renders a partition. Does not modify the compiler, so repeated calls
    /// return the same text.
    pub fn get_stylesheet(&self, partition: impl Into<Partition>) -> String {
        self.partition(partition).render(self.layout)
    }

    pub fn partition(&self, partition: impl Into<Partition>) -> &Sheet {
        match partition.into() {
            Partition::Critical => &self.critical,
            Partition::External => &self.external,
        }
    }

    fn sheet_mut(&mut self, partition: Partition) -> &mut Sheet {
        match partition {
            Partition::Critical => &mut self.critical,
            Partition::External => &mut self.external,
        }
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use super::{Compiler, Partition};

    #[test]
    fn partition_from_flag() {
        assert_eq!(Partition::from(true), Partition::Critical);
        assert_eq!(Partition::from(false), Partition::External);
    }

    #[test]
    fn renders_a_single_rule() {
        let mut compiler = Compiler::new(false);
        compiler.add_classes(["p-4"], true);
        assert_eq!(
            compiler.get_stylesheet(true),
            ".p-4 {\n  padding: 1rem;\n}\n"
        );
        assert_eq!(compiler.get_stylesheet(false), "");
    }

    #[test]
    fn partitions_do_not_share_rules() {
        let mut compiler = Compiler::new(true);
        compiler.add_classes(["m-2"], Partition::Critical);
        compiler.add_classes(["m-2", "p-1"], Partition::External);
        assert_eq!(
            compiler.get_stylesheet(Partition::Critical),
            ".m-2 {margin: 0.5rem;}"
        );
        assert_eq!(
            compiler.get_stylesheet(Partition::External),
            ".m-2 {margin: 0.5rem;}.p-1 {padding: 0.25rem;}"
        );
    }

    #[test]
    fn repeated_adds_are_idempotent() {
        let mut once = Compiler::new(false);
        once.add_classes(["hover:p-4", "sm:m-2", "container"], true);
        let mut twice = once.clone();
        twice.add_classes(["sm:m-2", "hover:p-4", "container"], true);
        assert_eq!(once.get_stylesheet(true), twice.get_stylesheet(true));
    }

    #[test]
    fn accepts_owned_and_borrowed_names() {
        let owned: Vec<String> = vec!["block".to_string()];
        let mut compiler = Compiler::default();
        compiler.add_classes(&owned, false);
        compiler.add_classes(owned, false);
        assert_eq!(
            compiler.get_stylesheet(false),
            ".block {\n  display: block;\n}\n"
        );
        assert!(!compiler.is_minified());
    }
}
