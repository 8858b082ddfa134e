//
//  nounproject
//  api/collections.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Collection Endpoints
//!
//! Retrieval of icon collections: a single collection by id or slug, the
//! paged list of all collections, and the collections belonging to one
//! user.
//!
//! # Endpoints
//!
//! | Method | Request |
//! |--------|---------|
//! | [`get_collection`](NounProject::get_collection) | `GET /collection/{id or slug}` |
//! | [`get_collections`](NounProject::get_collections) | `GET /collections` |
//! | [`get_user_collections`](NounProject::get_user_collections) | `GET /user/{user_id}/collections` |
//! | [`get_user_collection`](NounProject::get_user_collection) | `GET /user/{user_id}/collections/{slug}` |

use reqwest::Method;

use crate::error::Result;
use crate::ident::Identifier;
use crate::models::{Collection, CollectionList};
use crate::validate;

use super::client::{NounProject, Outcome};
use super::request::PageOptions;

impl NounProject {
    /// Retrieves a single collection by id or by slug.
    ///
    /// Integer identifiers address `collection/{id}`, string identifiers
    /// address `collection/{slug}`; the two accept different inputs, so
    /// the identifier decides which validation applies.
    ///
    /// # Parameters
    ///
    /// - `identifier` - Collection id (positive integer) or slug
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositive`](crate::Error::NonPositive) for an id
    /// of zero or less, and [`Error::IllegalSlug`](crate::Error::IllegalSlug)
    /// for a slug that is empty, non-ASCII, or contains whitespace.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nounproject::NounProject;
    ///
    /// async fn run() -> nounproject::Result<()> {
    ///     let client = NounProject::new("key", "secret")?;
    ///     let by_id = client.get_collection(12).await?;
    ///     let by_slug = client.get_collection("goat").await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_collection(
        &self,
        identifier: impl Into<Identifier>,
    ) -> Result<Outcome<Collection>> {
        match identifier.into() {
            Identifier::Id(id) => self.get_collection_by_id(id).await,
            Identifier::Slug(slug) => self.get_collection_by_slug(&slug).await,
        }
    }

    /// Retrieves a single collection by its id.
    ///
    /// # Parameters
    ///
    /// - `id` - Collection id, must be positive
    pub async fn get_collection_by_id(&self, id: i64) -> Result<Outcome<Collection>> {
        validate::assert_id(id, "id")?;
        let description = self.describe(Method::GET, &format!("collection/{}", id), &[], None)?;
        self.execute(description).await
    }

    /// Retrieves a single collection by its slug.
    ///
    /// # Parameters
    ///
    /// - `slug` - Collection slug, a single ASCII word
    pub async fn get_collection_by_slug(&self, slug: &str) -> Result<Outcome<Collection>> {
        validate::assert_slug(slug, "slug")?;
        let description = self.describe(Method::GET, &format!("collection/{}", slug), &[], None)?;
        self.execute(description).await
    }

    /// Retrieves a list of all collections.
    ///
    /// # Parameters
    ///
    /// - `options` - Paging parameters; [`PageOptions::default`] for none
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nounproject::{NounProject, PageOptions};
    ///
    /// async fn run() -> nounproject::Result<()> {
    ///     let client = NounProject::new("key", "secret")?;
    ///     let collections = client
    ///         .get_collections(PageOptions::new().limit(12).page(3))
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_collections(&self, options: PageOptions) -> Result<Outcome<CollectionList>> {
        let mut query = Vec::new();
        options.extend_query(&mut query);
        let description = self.describe(Method::GET, "collections", &query, None)?;
        self.execute(description).await
    }

    /// Retrieves the collections associated with a user.
    ///
    /// # Parameters
    ///
    /// - `user_id` - User id, must be positive
    pub async fn get_user_collections(&self, user_id: i64) -> Result<Outcome<CollectionList>> {
        validate::assert_id(user_id, "user_id")?;
        let description = self.describe(
            Method::GET,
            &format!("user/{}/collections", user_id),
            &[],
            None,
        )?;
        self.execute(description).await
    }

    /// Retrieves one collection of a user by slug.
    ///
    /// # Parameters
    ///
    /// - `user_id` - User id, must be positive
    /// - `slug` - Collection slug, a single ASCII word
    pub async fn get_user_collection(
        &self,
        user_id: i64,
        slug: &str,
    ) -> Result<Outcome<Collection>> {
        validate::assert_id(user_id, "user_id")?;
        validate::assert_slug(slug, "slug")?;
        let description = self.describe(
            Method::GET,
            &format!("user/{}/collections/{}", user_id, slug),
            &[],
            None,
        )?;
        self.execute(description).await
    }
}
