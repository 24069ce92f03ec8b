/// A sample construction project shown in the discovery grid. Static demo
/// data; real listings would come from a bidding service.
#[derive(Debug, PartialEq, Eq)]
pub struct ProjectListing {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub budget: &'static str,
    pub timeline: &'static str,
    pub status: &'static str,
    pub bids: u32,
    pub category: &'static str,
}

pub const CATEGORIES: &[&str] = &["Residential", "Commercial", "Industrial", "Mixed-Use"];

pub const LISTINGS: &[ProjectListing] = &[
    ProjectListing {
        id: 1,
        title: "Luxury Residential Complex",
        location: "Mumbai, Maharashtra",
        budget: "₹25 Crore",
        timeline: "18 months",
        status: "Active",
        bids: 12,
        category: "Residential",
    },
    ProjectListing {
        id: 2,
        title: "Tech Park Development",
        location: "Bangalore, Karnataka",
        budget: "₹80 Crore",
        timeline: "24 months",
        status: "Active",
        bids: 8,
        category: "Commercial",
    },
    ProjectListing {
        id: 3,
        title: "Sustainable Housing Colony",
        location: "Pune, Maharashtra",
        budget: "₹15 Crore",
        timeline: "14 months",
        status: "Active",
        bids: 15,
        category: "Residential",
    },
    ProjectListing {
        id: 4,
        title: "Industrial Manufacturing Hub",
        location: "Gujarat",
        budget: "₹45 Crore",
        timeline: "20 months",
        status: "Active",
        bids: 6,
        category: "Industrial",
    },
    ProjectListing {
        id: 5,
        title: "Mixed-Use Urban Development",
        location: "Delhi NCR",
        budget: "₹120 Crore",
        timeline: "30 months",
        status: "Active",
        bids: 10,
        category: "Mixed-Use",
    },
    ProjectListing {
        id: 6,
        title: "Green Office Spaces",
        location: "Hyderabad, Telangana",
        budget: "₹35 Crore",
        timeline: "16 months",
        status: "Active",
        bids: 9,
        category: "Commercial",
    },
];

/// Subset of `listings` matching the selected category, in original order.
/// `None` means no filter.
pub fn filter_by<'a>(
    listings: &'a [ProjectListing],
    category: Option<&str>,
) -> Vec<&'a ProjectListing> {
    match category {
        Some(cat) => listings.iter().filter(|l| l.category == cat).collect(),
        None => listings.iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_selection_returns_all_listings() {
        let all = filter_by(LISTINGS, None);
        assert_eq!(all.len(), 6);
        let ids: Vec<u32> = all.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn residential_filter_keeps_order() {
        let residential = filter_by(LISTINGS, Some("Residential"));
        let titles: Vec<&str> = residential.iter().map(|l| l.title).collect();
        assert_eq!(
            titles,
            vec!["Luxury Residential Complex", "Sustainable Housing Colony"]
        );
    }

    #[test]
    fn every_category_returns_only_its_own_listings() {
        for cat in CATEGORIES {
            let subset = filter_by(LISTINGS, Some(cat));
            assert!(!subset.is_empty(), "no sample listings for {cat}");
            assert!(subset.iter().all(|l| l.category == *cat));
        }
    }

    #[test]
    fn unknown_category_yields_empty_set() {
        assert!(filter_by(LISTINGS, Some("Hospitality")).is_empty());
    }

    #[test]
    fn sample_categories_are_all_known() {
        for listing in LISTINGS {
            assert!(
                CATEGORIES.contains(&listing.category),
                "{} has unknown category {}",
                listing.title,
                listing.category
            );
        }
    }
}
