//
//  nounproject
//  api/icons.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Icon Endpoints
//!
//! Retrieval of icons: a single icon by id or term, the icons of a
//! collection, term search, recent uploads, and the uploads of one user.
//!
//! # Endpoints
//!
//! | Method | Request |
//! |--------|---------|
//! | [`get_icon`](NounProject::get_icon) | `GET /icon/{id or term}` |
//! | [`get_collection_icons`](NounProject::get_collection_icons) | `GET /collection/{id or slug}/icons` |
//! | [`get_icons_by_term`](NounProject::get_icons_by_term) | `GET /icons/{term}?limit_to_public_domain={0,1}` |
//! | [`get_recent_icons`](NounProject::get_recent_icons) | `GET /icons/recent_uploads` |
//! | [`get_user_uploads`](NounProject::get_user_uploads) | `GET /user/{username}/uploads` |
//!
//! # Notes
//!
//! Icons are addressed by search *terms*, which may contain spaces and
//! non-ASCII text; collections are addressed by single-word ASCII *slugs*.
//! The two input rules are validated separately.

use reqwest::Method;

use crate::error::Result;
use crate::ident::Identifier;
use crate::models::{Icon, IconList};
use crate::validate;

use super::client::{NounProject, Outcome};
use super::request::PageOptions;

/// Value of the `limit_to_public_domain` query flag.
///
/// The API treats the flag as an integer where `0` means no restriction
/// and `1` restricts results to public-domain icons. Booleans convert to
/// exactly those two values; raw integers pass through verbatim for
/// parity with what the service accepts.
///
/// # Example
///
/// ```rust
/// use nounproject::PublicDomainLimit;
///
/// assert_eq!(PublicDomainLimit::from(false).0, 0);
/// assert_eq!(PublicDomainLimit::from(true).0, 1);
/// assert_eq!(PublicDomainLimit::from(12u32).0, 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicDomainLimit(pub u32);

impl From<bool> for PublicDomainLimit {
    fn from(restrict: bool) -> Self {
        PublicDomainLimit(restrict as u32)
    }
}

impl From<u32> for PublicDomainLimit {
    fn from(raw: u32) -> Self {
        PublicDomainLimit(raw)
    }
}

impl NounProject {
    /// Retrieves a single icon by id or by search term.
    ///
    /// # Parameters
    ///
    /// - `identifier` - Icon id (positive integer) or search term
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonPositive`](crate::Error::NonPositive) for an id
    /// of zero or less, and [`Error::IllegalTerm`](crate::Error::IllegalTerm)
    /// for an empty term.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nounproject::NounProject;
    ///
    /// async fn run() -> nounproject::Result<()> {
    ///     let client = NounProject::new("key", "secret")?;
    ///     let icon = client.get_icon("goat").await?.into_model().unwrap();
    ///     println!("{}", icon.path("icon_url")?);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_icon(&self, identifier: impl Into<Identifier>) -> Result<Outcome<Icon>> {
        match identifier.into() {
            Identifier::Id(id) => self.get_icon_by_id(id).await,
            Identifier::Slug(term) => self.get_icon_by_term(&term).await,
        }
    }

    /// Retrieves a single icon by its id.
    ///
    /// # Parameters
    ///
    /// - `id` - Icon id, must be positive
    pub async fn get_icon_by_id(&self, id: i64) -> Result<Outcome<Icon>> {
        validate::assert_id(id, "id")?;
        let description = self.describe(Method::GET, &format!("icon/{}", id), &[], None)?;
        self.execute(description).await
    }

    /// Retrieves the most relevant icon for a search term.
    ///
    /// # Parameters
    ///
    /// - `term` - Search term, must be nonempty
    pub async fn get_icon_by_term(&self, term: &str) -> Result<Outcome<Icon>> {
        validate::assert_term(term, "term")?;
        let description = self.describe(Method::GET, &format!("icon/{}", term), &[], None)?;
        self.execute(description).await
    }

    /// Retrieves the icons in one collection, by collection id or slug.
    ///
    /// # Parameters
    ///
    /// - `identifier` - Collection id (positive integer) or slug
    /// - `options` - Paging parameters; [`PageOptions::default`] for none
    pub async fn get_collection_icons(
        &self,
        identifier: impl Into<Identifier>,
        options: PageOptions,
    ) -> Result<Outcome<IconList>> {
        match identifier.into() {
            Identifier::Id(id) => self.get_collection_icons_by_id(id, options).await,
            Identifier::Slug(slug) => self.get_collection_icons_by_slug(&slug, options).await,
        }
    }

    /// Retrieves the icons in one collection by collection id.
    pub async fn get_collection_icons_by_id(
        &self,
        id: i64,
        options: PageOptions,
    ) -> Result<Outcome<IconList>> {
        validate::assert_id(id, "id")?;
        let mut query = Vec::new();
        options.extend_query(&mut query);
        let description = self.describe(
            Method::GET,
            &format!("collection/{}/icons", id),
            &query,
            None,
        )?;
        self.execute(description).await
    }

    /// Retrieves the icons in one collection by collection slug.
    pub async fn get_collection_icons_by_slug(
        &self,
        slug: &str,
        options: PageOptions,
    ) -> Result<Outcome<IconList>> {
        validate::assert_slug(slug, "slug")?;
        let mut query = Vec::new();
        options.extend_query(&mut query);
        let description = self.describe(
            Method::GET,
            &format!("collection/{}/icons", slug),
            &query,
            None,
        )?;
        self.execute(description).await
    }

    /// Retrieves the icons matching a search term.
    ///
    /// The `limit_to_public_domain` flag is always part of the query,
    /// ahead of any paging parameters.
    ///
    /// # Parameters
    ///
    /// - `term` - Search term, must be nonempty
    /// - `public_domain_only` - `true` to restrict results to
    ///   public-domain icons; plain integers pass through verbatim
    /// - `options` - Paging parameters; [`PageOptions::default`] for none
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nounproject::{NounProject, PageOptions};
    ///
    /// async fn run() -> nounproject::Result<()> {
    ///     let client = NounProject::new("key", "secret")?;
    ///     let icons = client
    ///         .get_icons_by_term("goat", true, PageOptions::new().limit(10))
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_icons_by_term(
        &self,
        term: &str,
        public_domain_only: impl Into<PublicDomainLimit>,
        options: PageOptions,
    ) -> Result<Outcome<IconList>> {
        validate::assert_term(term, "term")?;
        let mut query = vec![(
            "limit_to_public_domain",
            public_domain_only.into().0.to_string(),
        )];
        options.extend_query(&mut query);
        let description =
            self.describe(Method::GET, &format!("icons/{}", term), &query, None)?;
        self.execute(description).await
    }

    /// Retrieves the most recently uploaded icons.
    ///
    /// # Parameters
    ///
    /// - `options` - Paging parameters; [`PageOptions::default`] for none
    pub async fn get_recent_icons(&self, options: PageOptions) -> Result<Outcome<IconList>> {
        let mut query = Vec::new();
        options.extend_query(&mut query);
        let description = self.describe(Method::GET, "icons/recent_uploads", &query, None)?;
        self.execute(description).await
    }

    /// Retrieves the icons uploaded by one user.
    ///
    /// # Parameters
    ///
    /// - `username` - Username of the uploader, must be nonempty
    /// - `options` - Paging parameters; [`PageOptions::default`] for none
    pub async fn get_user_uploads(
        &self,
        username: &str,
        options: PageOptions,
    ) -> Result<Outcome<IconList>> {
        validate::assert_term(username, "username")?;
        let mut query = Vec::new();
        options.extend_query(&mut query);
        let description = self.describe(
            Method::GET,
            &format!("user/{}/uploads", username),
            &query,
            None,
        )?;
        self.execute(description).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tokio_test::block_on;

    fn client() -> NounProject {
        NounProject::builder()
            .key("key")
            .secret("secret")
            .dry_run(true)
            .build()
            .unwrap()
    }

    fn request_url<M>(outcome: Outcome<M>) -> String {
        outcome.into_request().unwrap().url().to_string()
    }

    #[test]
    fn test_icon_urls() {
        let client = client();
        assert_eq!(
            request_url(block_on(client.get_icon(12)).unwrap()),
            "http://api.thenounproject.com/icon/12"
        );
        assert_eq!(
            request_url(block_on(client.get_icon("goat")).unwrap()),
            "http://api.thenounproject.com/icon/goat"
        );
        assert_eq!(
            request_url(block_on(client.get_icon_by_id(12)).unwrap()),
            "http://api.thenounproject.com/icon/12"
        );
    }

    #[test]
    fn test_icon_terms_with_spaces_are_percent_encoded() {
        let outcome = block_on(client().get_icon_by_term("goat horn")).unwrap();
        assert_eq!(
            request_url(outcome),
            "http://api.thenounproject.com/icon/goat%20horn"
        );
    }

    #[test]
    fn test_icon_parameters_are_validated() {
        let client = client();
        for id in [0, -2] {
            assert!(matches!(
                block_on(client.get_icon(id)),
                Err(Error::NonPositive { parameter: "id" })
            ));
        }
        assert!(matches!(
            block_on(client.get_icon("")),
            Err(Error::IllegalTerm { parameter: "term" })
        ));
    }

    #[test]
    fn test_collection_icons_urls() {
        let client = client();
        assert_eq!(
            request_url(
                block_on(
                    client.get_collection_icons(12, PageOptions::new().limit(12).page(3))
                )
                .unwrap()
            ),
            "http://api.thenounproject.com/collection/12/icons?limit=12&page=3"
        );
        assert_eq!(
            request_url(
                block_on(client.get_collection_icons("goat", PageOptions::new().offset(12)))
                    .unwrap()
            ),
            "http://api.thenounproject.com/collection/goat/icons?offset=12"
        );
        assert_eq!(
            request_url(
                block_on(client.get_collection_icons_by_slug("goat", PageOptions::default()))
                    .unwrap()
            ),
            "http://api.thenounproject.com/collection/goat/icons"
        );
    }

    #[test]
    fn test_collection_icons_slug_rules_apply() {
        let err =
            block_on(client().get_collection_icons("goat horn", PageOptions::default()))
                .unwrap_err();
        assert!(matches!(err, Error::IllegalSlug { parameter: "slug" }));
    }

    #[test]
    fn test_search_urls_always_carry_the_public_domain_flag() {
        let client = client();
        assert_eq!(
            request_url(
                block_on(client.get_icons_by_term("goat", false, PageOptions::default()))
                    .unwrap()
            ),
            "http://api.thenounproject.com/icons/goat?limit_to_public_domain=0"
        );
        assert_eq!(
            request_url(
                block_on(client.get_icons_by_term("goat", true, PageOptions::default())).unwrap()
            ),
            "http://api.thenounproject.com/icons/goat?limit_to_public_domain=1"
        );
        assert_eq!(
            request_url(
                block_on(client.get_icons_by_term("goat", 12u32, PageOptions::default()))
                    .unwrap()
            ),
            "http://api.thenounproject.com/icons/goat?limit_to_public_domain=12"
        );
    }

    #[test]
    fn test_search_flag_precedes_paging_parameters() {
        let outcome = block_on(client().get_icons_by_term(
            "goat horn",
            true,
            PageOptions::new().limit(12).page(3),
        ))
        .unwrap();
        assert_eq!(
            request_url(outcome),
            "http://api.thenounproject.com/icons/goat%20horn?limit_to_public_domain=1&limit=12&page=3"
        );
    }

    #[test]
    fn test_empty_search_terms_are_rejected() {
        let err = block_on(client().get_icons_by_term("", false, PageOptions::default()))
            .unwrap_err();
        assert!(matches!(err, Error::IllegalTerm { parameter: "term" }));
    }

    #[test]
    fn test_recent_icons_urls() {
        let client = client();
        assert_eq!(
            request_url(block_on(client.get_recent_icons(PageOptions::default())).unwrap()),
            "http://api.thenounproject.com/icons/recent_uploads"
        );
        assert_eq!(
            request_url(
                block_on(client.get_recent_icons(PageOptions::new().limit(12))).unwrap()
            ),
            "http://api.thenounproject.com/icons/recent_uploads?limit=12"
        );
    }

    #[test]
    fn test_user_uploads_urls() {
        let client = client();
        assert_eq!(
            request_url(
                block_on(client.get_user_uploads("dutchico", PageOptions::default())).unwrap()
            ),
            "http://api.thenounproject.com/user/dutchico/uploads"
        );
        assert_eq!(
            request_url(
                block_on(client.get_user_uploads("dutchico", PageOptions::new().limit(12)))
                    .unwrap()
            ),
            "http://api.thenounproject.com/user/dutchico/uploads?limit=12"
        );
        assert!(matches!(
            block_on(client.get_user_uploads("", PageOptions::default())),
            Err(Error::IllegalTerm { parameter: "username" })
        ));
    }
}
