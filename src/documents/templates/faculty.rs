//! Staff directory page showing a single search hit.

use chrono::Datelike;

use super::validate_parties;
use crate::catalog::name_hash;
use crate::documents::display::{DisplayTree, Section};
use crate::documents::format::{compact_slug, email_local_part};
use crate::documents::models::{DocumentBundle, RenderOptions};
use crate::documents::traits::Template;
use crate::documents::validation::{validate_required, ValidationErrors};
use crate::documents::{DocumentError, DocumentType};

/// Years of service fall in `MIN_SERVICE_YEARS..MIN_SERVICE_YEARS + SERVICE_YEAR_SPREAD`.
const MIN_SERVICE_YEARS: u64 = 3;
const SERVICE_YEAR_SPREAD: u64 = 15;

pub fn years_of_service(name: &str) -> u64 {
    name_hash(name) % SERVICE_YEAR_SPREAD + MIN_SERVICE_YEARS
}

pub struct FacultyListingTemplate;

impl Template for FacultyListingTemplate {
    fn document_type(&self) -> DocumentType {
        DocumentType::FacultyListing
    }

    fn validate(&self, bundle: &DocumentBundle) -> Result<(), DocumentError> {
        let mut errors = ValidationErrors::new();
        validate_parties(bundle, &mut errors);
        validate_required(&bundle.employee.position, "employee.position", "Position", &mut errors);
        errors.into_result()
    }

    fn build(&self, bundle: &DocumentBundle, options: &RenderOptions) -> DisplayTree {
        let company = &bundle.company;
        let employee = &bundle.employee;
        let slug = compact_slug(&company.name, "school");
        let directory_url = format!("https://www.{}.example/faculty/directory", slug);

        let chrome = Section::new("browser").field("Address bar", directory_url.as_str());

        let header = Section::new("header")
            .image_opt("logo", options.logo_ref.as_deref())
            .heading(company.name.as_str())
            .text("Excellence in Education Since 1965")
            .list(["Home", "About", "Faculty & Staff", "Academics", "Contact"]);

        let search = Section::new("search")
            .heading("Faculty Directory")
            .field("Search", employee.name.as_str())
            .text(format!("Showing 1 result for \"{}\"", employee.name));

        let result = Section::new("result")
            .heading(employee.name.as_str())
            .text(employee.position.as_str())
            .field("Department", "Education")
            .field(
                "Email",
                format!("{}@{}.example", email_local_part(&employee.name), slug),
            )
            .field("Phone", company.phone.as_str())
            .field("Office", "Room 204, Main Building")
            .field(
                "Years of Service",
                format!("{} years", years_of_service(&employee.name)),
            );

        let footer = Section::new("siteFooter").text(format!(
            "© {} {}. All rights reserved. | {}",
            options.issued_on.year(),
            company.name,
            company.address
        ));

        DisplayTree::new(DocumentType::FacultyListing, "Faculty Directory")
            .section(chrome)
            .section(header)
            .section(search)
            .section(result)
            .section(footer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::templates::fixtures;

    #[test]
    fn test_years_of_service_range() {
        // "Jane Doe" hashes to 694.
        assert_eq!(years_of_service("Jane Doe"), 694 % 15 + 3);
        for i in 0..50 {
            let years = years_of_service(&format!("Staff {i}"));
            assert!((3..18).contains(&years));
        }
    }

    #[test]
    fn test_listing_derives_contact_details() {
        let tree = FacultyListingTemplate
            .render(&fixtures::bundle(), &fixtures::options())
            .unwrap();
        assert_eq!(
            tree.field("Address bar"),
            Some("https://www.acmewidgets.example/faculty/directory")
        );
        assert_eq!(tree.field("Email"), Some("jane.doe@acmewidgets.example"));
        assert_eq!(tree.field("Years of Service"), Some("7 years"));
    }
}
