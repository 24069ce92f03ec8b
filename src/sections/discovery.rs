use log::info;
use yew::prelude::*;

use crate::state::projects::{self, ProjectListing, CATEGORIES, LISTINGS};

#[derive(Properties, PartialEq)]
pub struct DiscoveryProps {
    /// Builders browse to bid; customers get the same grid as a preview of
    /// what's being built on the platform.
    #[prop_or(false)]
    pub builder_view: bool,
}

#[function_component(Discovery)]
pub fn discovery(props: &DiscoveryProps) -> Html {
    let filter = use_state(|| None::<&'static str>);

    let select = {
        let filter = filter.clone();
        move |category: Option<&'static str>| {
            let filter = filter.clone();
            Callback::from(move |_: MouseEvent| {
                filter.set(category);
            })
        }
    };

    let tab_class = |category: Option<&'static str>| {
        classes!(
            "filter-tab",
            (*filter == category).then_some("filter-tab--active")
        )
    };

    let visible = projects::filter_by(LISTINGS, *filter);

    let subtitle = if props.builder_view {
        "Browse active projects and submit your bid"
    } else {
        "A live look at the projects finding their builders"
    };

    html! {
        <div class="discovery">
            <div class="discovery-header">
                <h2 class="section-title">{"Discover Projects"}</h2>
                <p class="section-subtitle">{subtitle}</p>
            </div>

            <div class="filter-tabs">
                <button class={tab_class(None)} onclick={select(None)}>
                    {"All Projects"}
                </button>
                {
                    CATEGORIES.iter().map(|&cat| html! {
                        <button
                            key={cat}
                            class={tab_class(Some(cat))}
                            onclick={select(Some(cat))}
                        >
                            {cat}
                        </button>
                    }).collect::<Html>()
                }
            </div>

            if visible.is_empty() {
                <div class="discovery-empty">
                    <p>{"No projects found in this category"}</p>
                </div>
            } else {
                <div class="discovery-grid">
                    {
                        visible.iter().map(|listing| html! {
                            <ListingCard key={listing.id} listing={*listing} />
                        }).collect::<Html>()
                    }
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ListingCardProps {
    listing: &'static ProjectListing,
}

#[function_component(ListingCard)]
fn listing_card(props: &ListingCardProps) -> Html {
    let listing = props.listing;

    // There is no bidding backend; the button is the seam where a bidding
    // client would hang off.
    let on_bid = {
        let id = listing.id;
        let title = listing.title;
        Callback::from(move |_: MouseEvent| {
            info!("bid requested for listing {id} ({title})");
        })
    };

    html! {
        <div class="listing-card">
            <div class="listing-card-top">
                <h3 class="listing-title">{listing.title}</h3>
                <span class="listing-status">{listing.status}</span>
            </div>

            <span class="listing-category">{listing.category}</span>

            <div class="listing-details">
                <div class="listing-detail">
                    <span class="listing-detail-icon">{"📍"}</span>
                    <span>{listing.location}</span>
                </div>
                <div class="listing-detail-row">
                    <div class="listing-detail">
                        <span class="listing-detail-icon">{"💰"}</span>
                        <span class="listing-budget">{listing.budget}</span>
                    </div>
                    <div class="listing-detail">
                        <span class="listing-detail-icon">{"🕑"}</span>
                        <span>{listing.timeline}</span>
                    </div>
                </div>
            </div>

            <div class="listing-divider"></div>

            <div class="listing-footer">
                <span class="listing-bids">
                    { format!("📈 {} bids", listing.bids) }
                </span>
                <button class="listing-bid-button" onclick={on_bid}>
                    {"View & Bid"}
                </button>
            </div>
        </div>
    }
}
