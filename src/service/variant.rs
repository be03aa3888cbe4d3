//! Variant service.
//!
//! Turns API bodies into validated generation requests, enforces the configured
//! ceilings, and dispatches to the dot or plus generator.

use tracing::debug;

use crate::config::GenerationConfig;
use crate::domain::{
    AddressError, EmailAddress, GenerateBody, GenerationRequest, PageQuery, PlusParams, Scheme,
    SchemeParams,
};
use crate::error::{AppError, Result};
use crate::service::dot::generate_dot_variants;
use crate::service::plus::generate_plus_variants;
use crate::telemetry;

/// One page of a generated list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number.
    pub page: u32,
    /// Page size used for slicing.
    pub page_size: u32,
    /// Total items across all pages.
    pub total: usize,
    /// Items on this page.
    pub items: Vec<String>,
}

/// Service for email variant generation.
#[derive(Debug, Clone)]
pub struct VariantService {
    /// Defaults and ceilings.
    config: GenerationConfig,
}

impl VariantService {
    /// Create a new variant service.
    #[must_use]
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Generation configuration in effect.
    #[must_use]
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Validate a body and build the request it describes.
    ///
    /// # Errors
    ///
    /// Returns an address error for empty, malformed or scheme-incompatible
    /// input, `BadRequest` for parameters that do not fit the scheme, and
    /// `LimitExceeded` when the request implies more than `max_results`
    /// addresses.
    pub fn prepare(&self, body: &GenerateBody) -> Result<GenerationRequest> {
        let address = EmailAddress::parse(&body.email)?;

        let params = match body.scheme {
            Scheme::Dot => self.dot_params(&address, body)?,
            Scheme::Plus => SchemeParams::Plus(self.plus_params(body)?),
        };

        Ok(GenerationRequest::new(address, params))
    }

    fn dot_params(&self, address: &EmailAddress, body: &GenerateBody) -> Result<SchemeParams> {
        if body.range_start.is_some() || body.range_end.is_some() || body.custom_tags.is_some() {
            return Err(AppError::BadRequest(
                "range_start, range_end and custom_tags apply to the plus scheme only".to_string(),
            ));
        }

        address.ensure_dot_compatible()?;

        if self.config.strip_dots && address.undotted_local_part().is_empty() {
            return Err(AddressError::Malformed.into());
        }

        // Negative limits degrade to an empty result.
        let limit = body.limit.map_or(self.config.dot_default_limit, |limit| {
            usize::try_from(limit.max(0)).unwrap_or(usize::MAX)
        });
        self.check_ceiling(limit as u64)?;

        Ok(SchemeParams::Dot { limit })
    }

    fn plus_params(&self, body: &GenerateBody) -> Result<PlusParams> {
        let has_range =
            body.range_start.is_some() || body.range_end.is_some() || body.custom_tags.is_some();

        let params = match body.limit {
            Some(_) if has_range => {
                return Err(AppError::BadRequest(
                    "limit cannot be combined with range_start, range_end or custom_tags"
                        .to_string(),
                ));
            }
            Some(limit) => PlusParams::limit(limit),
            None => PlusParams::range(
                body.range_start.unwrap_or(self.config.plus_default_start),
                body.range_end.unwrap_or(self.config.plus_default_end),
                self.validate_tags(body.custom_tags.as_deref().unwrap_or_default())?,
            ),
        };

        self.check_ceiling(params.max_results())?;
        Ok(params)
    }

    fn validate_tags(&self, tags: &[String]) -> Result<Vec<String>> {
        if tags.len() > self.config.max_custom_tags {
            return Err(AppError::BadRequest(format!(
                "at most {} custom tags are allowed",
                self.config.max_custom_tags
            )));
        }

        tags.iter()
            .map(|tag| {
                let tag = tag.trim();
                if tag.is_empty() {
                    return Err(AppError::BadRequest(
                        "custom tags cannot be empty".to_string(),
                    ));
                }
                if tag.chars().count() > self.config.max_tag_length {
                    return Err(AppError::BadRequest(format!(
                        "custom tag exceeds {} characters",
                        self.config.max_tag_length
                    )));
                }
                if tag.contains('@') || tag.chars().any(char::is_whitespace) {
                    return Err(AppError::BadRequest(format!(
                        "custom tag {tag:?} contains '@' or whitespace"
                    )));
                }
                Ok(tag.to_string())
            })
            .collect()
    }

    fn check_ceiling(&self, requested: u64) -> Result<()> {
        let max = self.config.max_results as u64;
        if requested > max {
            return Err(AppError::LimitExceeded { requested, max });
        }
        Ok(())
    }

    /// Run the generator selected by `request`.
    #[must_use]
    pub fn generate(&self, request: &GenerationRequest) -> Vec<String> {
        let address = &request.address;

        match &request.params {
            SchemeParams::Dot { limit } => {
                let local = if self.config.strip_dots {
                    address.undotted_local_part()
                } else {
                    address.local_part().to_string()
                };
                generate_dot_variants(&local, address.domain(), *limit)
            }
            SchemeParams::Plus(params) => {
                generate_plus_variants(address.local_part(), address.domain(), params)
            }
        }
    }

    /// Validate `body`, generate, and record metrics.
    ///
    /// # Errors
    ///
    /// Returns the validation errors of [`VariantService::prepare`].
    pub fn generate_from(&self, body: &GenerateBody) -> Result<(GenerationRequest, Vec<String>)> {
        let request = self.prepare(body).inspect_err(|err| {
            telemetry::record_rejected(err.reason());
        })?;

        let variants = self.generate(&request);
        telemetry::record_generated(request.scheme(), variants.len());

        debug!(
            scheme = %request.scheme(),
            domain = request.address.domain(),
            count = variants.len(),
            "Generated variants"
        );

        Ok((request, variants))
    }

    /// Slice `items` according to `query`.
    ///
    /// Without a page size the whole list is one page. A page past the end is
    /// empty but still reports the full total.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` for a zero page or page size.
    pub fn paginate(&self, items: Vec<String>, query: PageQuery) -> Result<Page> {
        let page = query.page.unwrap_or(1);
        if page == 0 {
            return Err(AppError::BadRequest("page starts at 1".to_string()));
        }

        let max_page_size = u32::try_from(self.config.max_results).unwrap_or(u32::MAX);
        let page_size = match query.page_size {
            Some(0) => {
                return Err(AppError::BadRequest(
                    "page_size must be at least 1".to_string(),
                ));
            }
            Some(size) => size.min(max_page_size),
            None => u32::try_from(items.len())
                .unwrap_or(u32::MAX)
                .clamp(1, max_page_size.max(1)),
        };

        let total = items.len();
        let start = (page as usize - 1).saturating_mul(page_size as usize);
        let items = items
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();

        Ok(Page {
            page,
            page_size,
            total,
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> VariantService {
        VariantService::new(&GenerationConfig::default())
    }

    fn dot(email: &str, limit: Option<i64>) -> GenerateBody {
        GenerateBody {
            email: email.to_string(),
            scheme: Scheme::Dot,
            limit,
            ..Default::default()
        }
    }

    fn plus(email: &str) -> GenerateBody {
        GenerateBody {
            email: email.to_string(),
            scheme: Scheme::Plus,
            ..Default::default()
        }
    }

    #[test]
    fn test_dot_generation() {
        let (request, variants) = service()
            .generate_from(&dot("ab@gmail.com", Some(10)))
            .unwrap();
        assert_eq!(request.scheme(), Scheme::Dot);
        assert_eq!(variants, vec!["ab@gmail.com", "a.b@gmail.com"]);
    }

    #[test]
    fn test_dot_default_limit() {
        let (_, variants) = service()
            .generate_from(&dot("abcdefghijkl@gmail.com", None))
            .unwrap();
        assert_eq!(variants.len(), 500);
    }

    #[test]
    fn test_dot_strips_existing_dots() {
        let (_, variants) = service()
            .generate_from(&dot("a.b@gmail.com", Some(10)))
            .unwrap();
        assert_eq!(variants, vec!["ab@gmail.com", "a.b@gmail.com"]);
    }

    #[test]
    fn test_dot_keeps_dotted_when_not_stripping() {
        let config = GenerationConfig {
            strip_dots: false,
            ..Default::default()
        };
        let (_, variants) = VariantService::new(&config)
            .generate_from(&dot("a.b@gmail.com", Some(10)))
            .unwrap();
        assert_eq!(variants, vec!["a.b@gmail.com"]);
    }

    #[test]
    fn test_dot_only_dots_is_malformed() {
        let err = service().prepare(&dot("...@gmail.com", None)).unwrap_err();
        assert!(matches!(err, AppError::Address(AddressError::Malformed)));
    }

    #[test]
    fn test_dot_negative_limit_is_empty() {
        let (_, variants) = service()
            .generate_from(&dot("john@gmail.com", Some(-5)))
            .unwrap();
        assert!(variants.is_empty());
    }

    #[test]
    fn test_dot_requires_gmail() {
        let err = service().prepare(&dot("john@outlook.com", None)).unwrap_err();
        assert!(matches!(err, AppError::Address(AddressError::SchemeMismatch)));
    }

    #[test]
    fn test_dot_rejects_plus_fields() {
        let mut body = dot("john@gmail.com", None);
        body.range_start = Some(1);
        assert!(matches!(
            service().prepare(&body),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_dot_limit_ceiling() {
        let err = service()
            .prepare(&dot("john@gmail.com", Some(1001)))
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::LimitExceeded {
                requested: 1001,
                max: 1000
            }
        ));
    }

    #[test]
    fn test_empty_and_malformed_email() {
        assert!(matches!(
            service().prepare(&dot("", None)),
            Err(AppError::Address(AddressError::Empty))
        ));
        assert!(matches!(
            service().prepare(&plus("no-at-sign")),
            Err(AppError::Address(AddressError::Malformed))
        ));
    }

    #[test]
    fn test_plus_defaults() {
        let (_, variants) = service().generate_from(&plus("john@biz.com")).unwrap();
        assert_eq!(variants.len(), 50);
        assert_eq!(variants[0], "john+1@biz.com");
    }

    #[test]
    fn test_plus_range_and_tags() {
        let mut body = plus("john@biz.com");
        body.range_start = Some(1);
        body.range_end = Some(1);
        body.custom_tags = Some(vec!["1".to_string(), " news ".to_string()]);

        let (_, variants) = service().generate_from(&body).unwrap();
        assert_eq!(variants, vec!["john+1@biz.com", "john+news@biz.com"]);
    }

    #[test]
    fn test_plus_limit_shape() {
        let mut body = plus("john@biz.com");
        body.limit = Some(3);

        let request = service().prepare(&body).unwrap();
        assert_eq!(request.params, SchemeParams::Plus(PlusParams::limit(3)));
    }

    #[test]
    fn test_plus_limit_with_range_rejected() {
        let mut body = plus("john@biz.com");
        body.limit = Some(3);
        body.range_end = Some(10);
        assert!(matches!(
            service().prepare(&body),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_plus_ceiling_counts_tags() {
        let mut body = plus("john@biz.com");
        body.range_start = Some(1);
        body.range_end = Some(1000);
        body.custom_tags = Some(vec!["x".to_string()]);
        assert!(matches!(
            service().prepare(&body),
            Err(AppError::LimitExceeded {
                requested: 1001,
                ..
            })
        ));
    }

    #[test]
    fn test_plus_tag_validation() {
        for bad in ["", "   ", "a@b", "two words"] {
            let mut body = plus("john@biz.com");
            body.custom_tags = Some(vec![bad.to_string()]);
            assert!(
                matches!(service().prepare(&body), Err(AppError::BadRequest(_))),
                "{bad:?}"
            );
        }

        let mut body = plus("john@biz.com");
        body.custom_tags = Some(vec!["x".repeat(65)]);
        assert!(matches!(
            service().prepare(&body),
            Err(AppError::BadRequest(_))
        ));

        let mut body = plus("john@biz.com");
        body.custom_tags = Some((0..101).map(|i| format!("t{i}")).collect());
        assert!(matches!(
            service().prepare(&body),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_plus_works_on_any_domain() {
        let (_, variants) = service().generate_from(&plus("ann@gmail.com")).unwrap();
        assert_eq!(variants[0], "ann+1@gmail.com");
    }

    #[test]
    fn test_paginate() {
        let items: Vec<String> = (1..=25).map(|i| i.to_string()).collect();
        let svc = service();

        let page = svc
            .paginate(
                items.clone(),
                PageQuery {
                    page: Some(3),
                    page_size: Some(10),
                },
            )
            .unwrap();
        assert_eq!(page.total, 25);
        assert_eq!(page.items, vec!["21", "22", "23", "24", "25"]);

        let all = svc.paginate(items.clone(), PageQuery::default()).unwrap();
        assert_eq!(all.page, 1);
        assert_eq!(all.page_size, 25);
        assert_eq!(all.items.len(), 25);

        let past_end = svc
            .paginate(
                items.clone(),
                PageQuery {
                    page: Some(9),
                    page_size: Some(10),
                },
            )
            .unwrap();
        assert!(past_end.items.is_empty());
        assert_eq!(past_end.total, 25);

        assert!(
            svc.paginate(
                items.clone(),
                PageQuery {
                    page: Some(0),
                    page_size: None
                }
            )
            .is_err()
        );
        assert!(
            svc.paginate(
                items,
                PageQuery {
                    page: None,
                    page_size: Some(0)
                }
            )
            .is_err()
        );
    }

    #[test]
    fn test_paginate_empty_list() {
        let page = service().paginate(Vec::new(), PageQuery::default()).unwrap();
        assert_eq!(page.total, 0);
        assert_eq!(page.page_size, 1);
        assert!(page.items.is_empty());
    }
}
