//! Method-level security.
//!
//! Declarative access control attached to method invocations rather than
//! URL routes.
//!
//! - `access` - access attributes and their text form
//! - `target_index` - index of known secured target types
//! - `method` - rule tables, the declaration compiler and the interceptor

pub use access::{parse_attribute_list, serialize_attribute_list, ConfigAttribute};
pub use method::{
    InterceptMethodsDeclaration, MethodDefinitionSource, MethodPattern, MethodRuleTable,
    MethodSecurityInterceptor, MethodSecurityRule, ProtectedMethod,
};
pub use target_index::{TargetType, TargetTypeIndex};

pub mod access;
pub mod method;
pub mod target_index;
