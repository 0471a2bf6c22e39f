#[cfg(test)]
mod tests {

    mod slug_tests {
        use crate::services::slug::{generate_slug, validate_slug};

        #[test]
        fn test_generate_slug_basic() {
            assert_eq!(generate_slug("Hello World"), "hello-world");
        }

        #[test]
        fn test_generate_slug_empty() {
            assert_eq!(generate_slug(""), "");
        }

        #[test]
        fn test_generate_slug_punctuation_only() {
            assert_eq!(generate_slug("!!!"), "");
            assert_eq!(generate_slug("   "), "");
            assert_eq!(generate_slug("---"), "");
        }

        #[test]
        fn test_generate_slug_strips_punctuation() {
            assert_eq!(
                generate_slug("Audit & Compliance Services"),
                "audit-compliance-services"
            );
        }

        #[test]
        fn test_generate_slug_collapses_separator_runs() {
            assert_eq!(
                generate_slug("  Multiple   Spaces_and-Hyphens--Here  "),
                "multiple-spaces-and-hyphens-here"
            );
        }

        #[test]
        fn test_generate_slug_caps_and_digits() {
            assert_eq!(generate_slug("ALL CAPS TITLE 2024!"), "all-caps-title-2024");
        }

        #[test]
        fn test_generate_slug_underscores_become_hyphens() {
            // Underscores survive the character filter but are collapsed as
            // separators, never kept literally.
            assert_eq!(generate_slug("snake_case_title"), "snake-case-title");
            assert_eq!(generate_slug("mixed _ separators"), "mixed-separators");
        }

        #[test]
        fn test_generate_slug_filters_non_ascii() {
            assert_eq!(generate_slug("Café au lait"), "caf-au-lait");
            assert_eq!(generate_slug("Hello 世界"), "hello");
        }

        #[test]
        fn test_generate_slug_edge_punctuation_then_whitespace() {
            // Stripping leading punctuation leaves whitespace that the
            // collapse turns into an edge hyphen; the final trim removes it.
            assert_eq!(generate_slug("!! Leading noise"), "leading-noise");
            assert_eq!(generate_slug("Trailing noise !!"), "trailing-noise");
        }

        #[test]
        fn test_generate_slug_idempotent() {
            let inputs = [
                "Hello World",
                "Audit & Compliance Services",
                "  Multiple   Spaces_and-Hyphens--Here  ",
                "ALL CAPS TITLE 2024!",
                "already-clean-slug",
                "Café au lait",
                "!!!",
                "",
            ];
            for input in inputs {
                let once = generate_slug(input);
                assert_eq!(generate_slug(&once), once, "not idempotent for {:?}", input);
            }
        }

        #[test]
        fn test_generate_slug_output_validates_or_is_empty() {
            let inputs = [
                "Hello World",
                "Audit & Compliance Services",
                "ALL CAPS TITLE 2024!",
                "  _-_  ",
                "!!!",
                "a",
                "Hello 世界",
                "Price: $99.99",
            ];
            for input in inputs {
                let slug = generate_slug(input);
                assert!(
                    slug.is_empty() || validate_slug(&slug),
                    "produced invalid slug {:?} for {:?}",
                    slug,
                    input
                );
            }
        }

        #[test]
        fn test_generate_slug_clean_input_unchanged() {
            assert_eq!(generate_slug("audit-compliance-services"), "audit-compliance-services");
        }

        #[test]
        fn test_validate_slug_valid() {
            assert!(validate_slug("audit-compliance-services"));
            assert!(validate_slug("a"));
            assert!(validate_slug("123"));
            assert!(validate_slug("lead-auditor-2024"));
        }

        #[test]
        fn test_validate_slug_rejects_empty() {
            // generate_slug can yield "", which is deliberately not a valid
            // slug; callers fall back to an explicit identifier instead.
            assert!(!validate_slug(""));
        }

        #[test]
        fn test_validate_slug_rejects_uppercase() {
            assert!(!validate_slug("Audit-Compliance"));
        }

        #[test]
        fn test_validate_slug_rejects_bad_hyphens() {
            assert!(!validate_slug("-leading-hyphen"));
            assert!(!validate_slug("trailing-hyphen-"));
            assert!(!validate_slug("double--hyphen"));
        }

        #[test]
        fn test_validate_slug_rejects_other_characters() {
            assert!(!validate_slug("hello_world"));
            assert!(!validate_slug("hello world"));
            assert!(!validate_slug("hello!"));
        }

        #[test]
        fn test_validate_slug_no_length_cap() {
            let long = "a".repeat(500);
            assert!(validate_slug(&long));
        }
    }

    mod markdown_tests {
        use crate::services::markdown::{plain_text_summary, render};

        #[test]
        fn test_render_heading() {
            let html = render("# Hello World");
            assert!(html.contains("<h1>"));
            assert!(html.contains("Hello World"));
        }

        #[test]
        fn test_render_paragraph() {
            let html = render("This is a paragraph.");
            assert!(html.contains("<p>"));
            assert!(html.contains("This is a paragraph."));
        }

        #[test]
        fn test_render_emphasis() {
            let html = render("**bold** and *italic*");
            assert!(html.contains("<strong>bold</strong>"));
            assert!(html.contains("<em>italic</em>"));
        }

        #[test]
        fn test_render_list() {
            let html = render("- Item 1\n- Item 2");
            assert!(html.contains("<ul>"));
            assert!(html.contains("<li>"));
        }

        #[test]
        fn test_summary_short_text_unchanged() {
            assert_eq!(plain_text_summary("Just a sentence.", 160), "Just a sentence.");
        }

        #[test]
        fn test_summary_strips_markup() {
            let summary = plain_text_summary("Some **bold** and a [link](https://example.com).", 160);
            assert_eq!(summary, "Some bold and a link.");
        }

        #[test]
        fn test_summary_skips_headings() {
            let summary = plain_text_summary("# Title\n\nBody text here.", 160);
            assert_eq!(summary, "Body text here.");
        }

        #[test]
        fn test_summary_skips_code_blocks() {
            let summary = plain_text_summary("Before.\n\n```\nlet x = 5;\n```\n\nAfter.", 160);
            assert_eq!(summary, "Before. After.");
        }

        #[test]
        fn test_summary_truncates_at_word_boundary() {
            let summary = plain_text_summary("one two three four five", 10);
            assert_eq!(summary, "one two...");
        }
    }

    mod seo_tests {
        use crate::config::SiteConfig;
        use crate::services::seo::PageMeta;

        fn site() -> SiteConfig {
            SiteConfig {
                title: "Ridgeline Advisory".to_string(),
                description: "Audit, compliance and training.".to_string(),
                url: "https://ridgeline.example.com".to_string(),
                language: "en".to_string(),
            }
        }

        #[test]
        fn test_home_meta() {
            let meta = PageMeta::home(&site());
            assert_eq!(meta.title, "Ridgeline Advisory");
            assert_eq!(meta.description, "Audit, compliance and training.");
            assert_eq!(meta.canonical, "https://ridgeline.example.com/");
            assert_eq!(meta.og_type, "website");
        }

        #[test]
        fn test_page_meta_composes_title() {
            let meta = PageMeta::page(&site(), "Risk Advisory", "Summary.", "/services/risk-advisory");
            assert_eq!(meta.title, "Risk Advisory | Ridgeline Advisory");
            assert_eq!(
                meta.canonical,
                "https://ridgeline.example.com/services/risk-advisory"
            );
            assert_eq!(meta.og_type, "article");
        }

        #[test]
        fn test_canonical_handles_trailing_slash() {
            let mut s = site();
            s.url = "https://ridgeline.example.com/".to_string();
            let meta = PageMeta::page(&s, "Contact", "Summary.", "/contact");
            assert_eq!(meta.canonical, "https://ridgeline.example.com/contact");
        }
    }

    mod certificate_tests {
        use crate::models::{Certificate, CertificateStanding};
        use crate::services::certificates::normalize_number;
        use chrono::NaiveDate;

        fn cert(expires_on: Option<&str>, revoked: bool) -> Certificate {
            Certificate {
                id: 1,
                number: "RA-2024-0117".to_string(),
                holder_name: "Dana Whitfield".to_string(),
                program_title: "Lead Auditor Certification".to_string(),
                issued_on: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
                expires_on: expires_on.map(|d| d.parse().unwrap()),
                revoked,
                created_at: "2024-05-10 09:00:00".to_string(),
            }
        }

        fn day(s: &str) -> NaiveDate {
            s.parse().unwrap()
        }

        #[test]
        fn test_standing_valid_before_expiry() {
            let c = cert(Some("2027-05-10"), false);
            assert_eq!(c.standing_on(day("2025-01-01")), CertificateStanding::Valid);
        }

        #[test]
        fn test_standing_valid_on_expiry_day() {
            // "Valid through": the printed expiry date is still inside the
            // validity window.
            let c = cert(Some("2027-05-10"), false);
            assert_eq!(c.standing_on(day("2027-05-10")), CertificateStanding::Valid);
        }

        #[test]
        fn test_standing_expired_after_expiry() {
            let c = cert(Some("2027-05-10"), false);
            assert_eq!(c.standing_on(day("2027-05-11")), CertificateStanding::Expired);
        }

        #[test]
        fn test_standing_no_expiry_never_expires() {
            let c = cert(None, false);
            assert_eq!(c.standing_on(day("2099-01-01")), CertificateStanding::Valid);
        }

        #[test]
        fn test_standing_revoked_wins_over_expiry() {
            let c = cert(Some("2020-01-01"), true);
            assert_eq!(c.standing_on(day("2025-01-01")), CertificateStanding::Revoked);
        }

        #[test]
        fn test_normalize_number() {
            assert_eq!(normalize_number("  ra-2024-0117  "), "RA-2024-0117");
            assert_eq!(normalize_number("RA-2024-0117"), "RA-2024-0117");
        }
    }

    mod contact_tests {
        use crate::models::NewContactMessage;
        use crate::services::contact::{validate, ContactRejection, MAX_BODY_LENGTH};

        fn message() -> NewContactMessage {
            NewContactMessage {
                name: "Dana Whitfield".to_string(),
                email: "dana@example.com".to_string(),
                phone: None,
                body: "We need an internal audit before Q3.".to_string(),
            }
        }

        #[test]
        fn test_validate_accepts_complete_message() {
            assert_eq!(validate(&message()), Ok(()));
        }

        #[test]
        fn test_validate_rejects_missing_name() {
            let mut m = message();
            m.name = "   ".to_string();
            assert_eq!(validate(&m), Err(ContactRejection::MissingName));
        }

        #[test]
        fn test_validate_rejects_bad_emails() {
            for bad in ["plainaddress", "no@dots", "@missing-local.com", "two words@example.com"] {
                let mut m = message();
                m.email = bad.to_string();
                assert!(
                    matches!(validate(&m), Err(ContactRejection::InvalidEmail(_))),
                    "accepted {:?}",
                    bad
                );
            }
        }

        #[test]
        fn test_validate_rejects_empty_body() {
            let mut m = message();
            m.body = "\n\t ".to_string();
            assert_eq!(validate(&m), Err(ContactRejection::MissingBody));
        }

        #[test]
        fn test_validate_rejects_oversized_body() {
            let mut m = message();
            m.body = "x".repeat(MAX_BODY_LENGTH + 1);
            assert!(matches!(validate(&m), Err(ContactRejection::BodyTooLong(_))));
        }

        #[test]
        fn test_validate_phone_is_optional() {
            let mut m = message();
            m.phone = Some("+1 555 0100".to_string());
            assert_eq!(validate(&m), Ok(()));
        }
    }

    mod model_tests {
        use crate::models::{CertificateStanding, ListingStatus, ProgramLevel};

        #[test]
        fn test_listing_status_roundtrip() {
            for status in [ListingStatus::Draft, ListingStatus::Published, ListingStatus::Retired] {
                assert_eq!(status.to_string().parse::<ListingStatus>(), Ok(status));
            }
        }

        #[test]
        fn test_listing_status_unknown() {
            assert!("archived".parse::<ListingStatus>().is_err());
        }

        #[test]
        fn test_listing_status_default_is_draft() {
            assert_eq!(ListingStatus::default(), ListingStatus::Draft);
        }

        #[test]
        fn test_program_level_roundtrip() {
            for level in [ProgramLevel::Foundation, ProgramLevel::Practitioner, ProgramLevel::Lead] {
                assert_eq!(level.to_string().parse::<ProgramLevel>(), Ok(level));
            }
        }

        #[test]
        fn test_certificate_standing_roundtrip() {
            for standing in [
                CertificateStanding::Valid,
                CertificateStanding::Expired,
                CertificateStanding::Revoked,
            ] {
                assert_eq!(standing.to_string().parse::<CertificateStanding>(), Ok(standing));
            }
        }
    }

    mod config_tests {
        use crate::Config;

        fn minimal_toml() -> String {
            r#"
[site]
title = "Ridgeline Advisory"
description = "Audit, compliance and training."
url = "http://localhost:3000"

[database]
path = "./data/ridgeline.db"
"#
            .to_string()
        }

        #[test]
        fn test_minimal_config_uses_defaults() {
            let config: Config = toml::from_str(&minimal_toml()).unwrap();
            config.validate().unwrap();
            assert_eq!(config.site.language, "en");
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.server.port, 3000);
            assert_eq!(config.content.summary_length, 160);
            assert_eq!(config.api.default_page_size, 20);
            assert_eq!(config.api.max_page_size, 100);
            assert_eq!(
                config.homepage.get_sections_order(),
                vec!["hero", "services", "training", "certificates", "contact"]
            );
        }

        #[test]
        fn test_relative_site_url_rejected() {
            let toml = minimal_toml().replace("http://localhost:3000", "/just-a-path");
            let config: Config = toml::from_str(&toml).unwrap();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_zero_summary_length_rejected() {
            let mut toml = minimal_toml();
            toml.push_str("\n[content]\nsummary_length = 0\n");
            let config: Config = toml::from_str(&toml).unwrap();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_unknown_homepage_section_rejected() {
            let mut toml = minimal_toml();
            toml.push_str("\n[homepage]\nsections_order = [\"hero\", \"testimonials\"]\n");
            let config: Config = toml::from_str(&toml).unwrap();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_default_page_size_exceeding_max_rejected() {
            let mut toml = minimal_toml();
            toml.push_str("\n[api]\ndefault_page_size = 200\nmax_page_size = 100\n");
            let config: Config = toml::from_str(&toml).unwrap();
            assert!(config.validate().is_err());
        }

        #[test]
        fn test_sections_order_can_hide_sections() {
            let mut toml = minimal_toml();
            toml.push_str("\n[homepage]\nsections_order = [\"hero\", \"contact\"]\n");
            let config: Config = toml::from_str(&toml).unwrap();
            config.validate().unwrap();
            assert_eq!(config.homepage.get_sections_order(), vec!["hero", "contact"]);
        }
    }
}
