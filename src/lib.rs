//! Hand-linked singly linked chains.
//!
//! Nodes live in a [`ChainArena`]; each node holds a value and an optional
//! successor id. A chain is named by its head id, [`print_list`] renders it as
//! `<v1,v2,...,>` and [`ChainArena::get`] follows a given number of hops.
//!
//! ```
//! use hoplist::{render_list, ChainArena, Delimiters};
//!
//! let mut arena = ChainArena::new();
//! let head = arena.chain([10, 20, 30, 40]);
//! assert_eq!(render_list(&arena, head, &Delimiters::default()).unwrap(), "<10,20,30,40,>");
//!
//! let fourth = arena.get(head, 3).unwrap().expect("fourth node");
//! assert_eq!(*arena.value(fourth).unwrap(), 40);
//! assert_eq!(arena.get(None, 0), Ok(None));
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use application::{
    print_list, print_node, render_list, write_list, write_node, ApplicationError,
    ApplicationResult, Delimiters,
};
pub use domain::{ChainArena, DomainError, DomainResult, Node, NodeId, Successors};
