//! # Hearth Forums
//!
//! The subforum hierarchy of every project, built once from flat rows:
//! - [`SubforumTree`] links rows into a forest and rejects rows that do not
//!   form one
//! - [`LineageBuilder`] answers ancestor and slug-path queries for one
//!   request, memoizing each answer
//! - the `breadcrumbs` helpers turn a lineage into navigation links
//!
//! ## Example
//!
//! ```
//! use hearth_forums::{LineageBuilder, SubforumRow, SubforumTree};
//! use hearth_router::{ProjectId, SubforumId};
//!
//! let rows: Vec<SubforumRow> = serde_json::from_str(r#"[
//!     {"id": 1, "project_id": 1, "slug": "root", "name": "Forums"},
//!     {"id": 2, "parent_id": 1, "project_id": 1, "slug": "code", "name": "Code"},
//!     {"id": 3, "parent_id": 1, "project_id": 1, "slug": "art", "name": "Art"}
//! ]"#).unwrap();
//! let tree = SubforumTree::build(rows).unwrap();
//!
//! let mut lineages = LineageBuilder::new(&tree);
//! let code = lineages.find_id_by_slug(ProjectId::new(1).unwrap(), "code").unwrap();
//! assert_eq!(&*lineages.subforum_slug_lineage(code).unwrap(), &["code"]);
//! assert_eq!(lineages.lineage(code).unwrap()[0].id, SubforumId::new(1).unwrap());
//! ```

mod breadcrumbs;
mod error;
mod lineage;
mod tree;

pub use breadcrumbs::{
    blog_breadcrumb, blog_thread_breadcrumbs, forum_breadcrumb, forum_thread_breadcrumbs, project_breadcrumb,
    subforum_breadcrumbs, Breadcrumb,
};
pub use error::{LineageError, TreeError};
pub use lineage::{Lineage, LineageBuilder};
pub use tree::{SubforumNode, SubforumRow, SubforumTree};
