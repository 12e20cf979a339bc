//! Static catalog content. Order is part of the selection contract: append
//! new entries at the end, never insert or reorder.

use super::InstitutionRecord;

pub(super) fn institutions() -> Vec<InstitutionRecord> {
    vec![
        InstitutionRecord::new(
            "Northgate State University",
            "Northgate State",
            "northgate.example",
            "asset://logos/northgate.svg",
            "#041E42",
            "100 College Ave, Northgate, PA 16800, USA",
            &["Computer Science", "Engineering", "Business", "Education", "Agriculture"],
        ),
        InstitutionRecord::new(
            "Meridian Institute of Technology",
            "MIT",
            "meridian-tech.example",
            "asset://logos/meridian.svg",
            "#A31F34",
            "1 Meridian Way, Lakeport, MA 02100, USA",
            &[
                "Computer Science",
                "Mechanical Engineering",
                "Physics",
                "Mathematics",
                "Electrical Engineering",
            ],
        ),
        InstitutionRecord::new(
            "Halvorsen University",
            "Halvorsen",
            "halvorsen.example",
            "asset://logos/halvorsen.svg",
            "#A51C30",
            "12 Quincy Green, Halvorsen, MA 02130, USA",
            &["Law", "Medicine", "Business", "Political Science", "Economics"],
        ),
        InstitutionRecord::new(
            "Westbrook University",
            "Westbrook",
            "westbrook.example",
            "asset://logos/westbrook.svg",
            "#8C1515",
            "450 Oak Mall, Westbrook, CA 94300, USA",
            &["Computer Science", "Engineering", "Business", "Law", "Medicine"],
        ),
        InstitutionRecord::new(
            "University of Calloway, Bayside",
            "UC Bayside",
            "bayside.example",
            "asset://logos/bayside.svg",
            "#003262",
            "Bayside, CA 94700, USA",
            &["Computer Science", "Economics", "Engineering", "Business", "Political Science"],
        ),
        InstitutionRecord::new(
            "Ashcombe University",
            "Ashcombe",
            "ashcombe.example",
            "asset://logos/ashcombe.svg",
            "#00356B",
            "Ashcombe, CT 06500, USA",
            &["Law", "History", "Economics", "Political Science", "Psychology"],
        ),
        InstitutionRecord::new(
            "Pellham University",
            "Pellham",
            "pellham.example",
            "asset://logos/pellham.svg",
            "#FF6600",
            "Pellham, NJ 08500, USA",
            &["Mathematics", "Physics", "Economics", "Computer Science", "Public Policy"],
        ),
        InstitutionRecord::new(
            "Larchmont University",
            "Larchmont",
            "larchmont.example",
            "asset://logos/larchmont.png",
            "#B9D9EB",
            "116th St & Elm, Larchmont, NY 10000, USA",
            &["Business", "Law", "Journalism", "Medicine", "International Relations"],
        ),
        InstitutionRecord::new(
            "New Harbor University",
            "NHU",
            "newharbor.example",
            "asset://logos/newharbor.svg",
            "#57068C",
            "70 Harbor Sq, New Harbor, NY 10010, USA",
            &["Business", "Arts", "Law", "Medicine", "Computer Science"],
        ),
        InstitutionRecord::new(
            "University of Los Verdes",
            "ULV",
            "losverdes.example",
            "asset://logos/losverdes.svg",
            "#2774AE",
            "405 Verdes Ave, Los Verdes, CA 90000, USA",
            &["Film", "Psychology", "Biology", "Engineering", "Business"],
        ),
        InstitutionRecord::new(
            "Dunmore College",
            "Dunmore",
            "dunmore.example",
            "asset://logos/dunmore.svg",
            "#800000",
            "5801 Lake Ave, Dunmore, IL 60600, USA",
            &["Economics", "Physics", "Mathematics", "Sociology", "Law"],
        ),
        InstitutionRecord::new(
            "Keswick University",
            "Keswick",
            "keswick.example",
            "asset://logos/keswick.svg",
            "#003087",
            "Keswick, NC 27700, USA",
            &["Medicine", "Law", "Business", "Public Policy", "Engineering"],
        ),
        InstitutionRecord::new(
            "Fairhaven Polytechnic",
            "Fairhaven Poly",
            "fairhaven.example",
            "asset://logos/fairhaven.svg",
            "#B31B1B",
            "Fairhaven, NY 14800, USA",
            &["Engineering", "Agriculture", "Hotel Administration", "Computer Science", "Architecture"],
        ),
    ]
}
