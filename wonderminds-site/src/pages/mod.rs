//! Server-rendered site pages
//!
//! Every page extends `pages/base.html`, which wraps the page body in
//! partial markers. Regular requests get the whole document; HTMX-boosted
//! navigation gets only the content between the markers.
//!
//! ```rust
//! use wonderminds_site::pages::{PageTemplate, ServicesPage};
//!
//! let response = ServicesPage::new().render_page(true);
//! assert_eq!(response.status(), axum::http::StatusCode::OK);
//! ```

mod extractor;

pub use extractor::extract_partial;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use axum_htmx::HxRequest;

use crate::content::{
    ContactDetails, GalleryImage, Highlight, Program, Service, CONTACT, FAQ, GALLERY,
    PROGRAMS, PROGRAM_HIGHLIGHTS, SERVICES, VALUES,
};
use crate::forms::options;
use crate::state::AppState;

/// Extension trait rendering askama pages for full or partial requests
pub trait PageTemplate: Template {
    /// Render the full page, or only its main content when `is_htmx`
    ///
    /// A rendering failure is logged and answered with a bare 500.
    fn render_page(self, is_htmx: bool) -> Response
    where
        Self: Sized,
    {
        match self.render() {
            Ok(html) if is_htmx => Html(extract_partial(&html).into_owned()).into_response(),
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Template rendering error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering failed").into_response()
            }
        }
    }
}

impl<T: Template> PageTemplate for T {}

/// A navigation bar entry
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    /// Target path
    pub href: &'static str,
    /// Link text
    pub label: &'static str,
}

/// Navigation bar entries, in display order
pub const NAV: &[NavLink] = &[
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/about", label: "About" },
    NavLink { href: "/programs", label: "Programs" },
    NavLink { href: "/services", label: "Services" },
    NavLink { href: "/gallery", label: "Gallery" },
    NavLink { href: "/contact", label: "Contact" },
    NavLink { href: "/booking", label: "Book a Consultation" },
];

/// Data shared by the base layout
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    /// Path of the page being rendered, highlighted in the nav
    pub current: &'static str,
    /// Navigation entries
    pub nav: &'static [NavLink],
    /// Footer contact details
    pub contact: ContactDetails,
}

impl Layout {
    const fn at(current: &'static str) -> Self {
        Self {
            current,
            nav: NAV,
            contact: CONTACT,
        }
    }
}

/// `GET /`
#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomePage {
    layout: Layout,
    values: &'static [Highlight],
    programs: &'static [Program],
}

impl HomePage {
    /// Landing page with values and a program overview
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: Layout::at("/"),
            values: VALUES,
            programs: PROGRAMS,
        }
    }
}

/// `GET /about`
#[derive(Template)]
#[template(path = "pages/about.html")]
pub struct AboutPage {
    layout: Layout,
    values: &'static [Highlight],
}

impl AboutPage {
    /// Mission and core values
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: Layout::at("/about"),
            values: VALUES,
        }
    }
}

/// `GET /programs`
#[derive(Template)]
#[template(path = "pages/programs.html")]
pub struct ProgramsPage {
    layout: Layout,
    programs: &'static [Program],
    highlights: &'static [Highlight],
}

impl ProgramsPage {
    /// Age-based programs
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: Layout::at("/programs"),
            programs: PROGRAMS,
            highlights: PROGRAM_HIGHLIGHTS,
        }
    }
}

/// `GET /services`
#[derive(Template)]
#[template(path = "pages/services.html")]
pub struct ServicesPage {
    layout: Layout,
    services: &'static [Service],
}

impl ServicesPage {
    /// Therapy and support services
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: Layout::at("/services"),
            services: SERVICES,
        }
    }
}

/// `GET /gallery`
#[derive(Template)]
#[template(path = "pages/gallery.html")]
pub struct GalleryPage {
    layout: Layout,
    images: &'static [GalleryImage],
}

impl GalleryPage {
    /// Captioned facility photos
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: Layout::at("/gallery"),
            images: GALLERY,
        }
    }
}

/// `GET /contact`: contact, appointment and visit forms
#[derive(Template)]
#[template(path = "pages/contact.html")]
pub struct ContactPage {
    layout: Layout,
    faq: &'static [Highlight],
    age_groups: &'static [&'static str],
    visit_slots: &'static [&'static str],
}

impl ContactPage {
    /// Contact details, forms and FAQ
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: Layout::at("/contact"),
            faq: FAQ,
            age_groups: options::CHILD_AGE_GROUPS,
            visit_slots: options::VISIT_TIME_SLOTS,
        }
    }
}

/// `GET /booking`: pre-booking form
#[derive(Template)]
#[template(path = "pages/booking.html")]
pub struct BookingPage {
    layout: Layout,
    genders: &'static [&'static str],
    concerns: &'static [&'static str],
    other_concern: &'static str,
    modes: &'static [&'static str],
    days: &'static [&'static str],
    time_slots: &'static [&'static str],
}

impl BookingPage {
    /// Consultation pre-booking
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: Layout::at("/booking"),
            genders: options::GENDERS,
            concerns: options::PRIMARY_CONCERNS,
            other_concern: options::OTHER_CONCERN,
            modes: options::CONSULTATION_MODES,
            days: options::CONSULTATION_DAYS,
            time_slots: options::BOOKING_TIME_SLOTS,
        }
    }
}

/// Fallback for unknown paths
#[derive(Template)]
#[template(path = "pages/not_found.html")]
pub struct NotFoundPage {
    layout: Layout,
}

impl NotFoundPage {
    /// Page not found
    #[must_use]
    pub const fn new() -> Self {
        Self {
            layout: Layout::at(""),
        }
    }
}

/// Page routes, without the 404 fallback
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/about", get(about))
        .route("/programs", get(programs))
        .route("/services", get(services))
        .route("/gallery", get(gallery))
        .route("/contact", get(contact))
        .route("/booking", get(booking))
}

async fn home(HxRequest(is_htmx): HxRequest) -> Response {
    HomePage::new().render_page(is_htmx)
}

async fn about(HxRequest(is_htmx): HxRequest) -> Response {
    AboutPage::new().render_page(is_htmx)
}

async fn programs(HxRequest(is_htmx): HxRequest) -> Response {
    ProgramsPage::new().render_page(is_htmx)
}

async fn services(HxRequest(is_htmx): HxRequest) -> Response {
    ServicesPage::new().render_page(is_htmx)
}

async fn gallery(HxRequest(is_htmx): HxRequest) -> Response {
    GalleryPage::new().render_page(is_htmx)
}

async fn contact(HxRequest(is_htmx): HxRequest) -> Response {
    ContactPage::new().render_page(is_htmx)
}

async fn booking(HxRequest(is_htmx): HxRequest) -> Response {
    BookingPage::new().render_page(is_htmx)
}

/// 404 page for any unmatched path
pub async fn not_found(HxRequest(is_htmx): HxRequest) -> Response {
    (StatusCode::NOT_FOUND, NotFoundPage::new().render_page(is_htmx)).into_response()
}
