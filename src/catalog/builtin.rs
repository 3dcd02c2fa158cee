//! Built-in block and category definitions
//!
//! A small default catalog covering the common business verticals, stored as
//! TOML the same way user-supplied catalog files are. The resolver never
//! special-cases these; they only exist so the library and CLI work out of
//! the box.

use super::library::{BlockLibrary, CategoryCatalog};

/// Default shared block definitions
const BUILTIN_BLOCKS: &str = r##"
[[blocks]]
id = "hero"
category = "header"
baseTemplate = """
<section className="hero">
  <h1>{headline}</h1>
  <p>{subheadline}</p>
  <a href="{ctaLink}">{ctaText}</a>
</section>
"""

[blocks.placeholders.headline]
type = "text"
required = true
maxLength = 80
description = "Main headline shown above the fold"

[blocks.placeholders.subheadline]
type = "text"
maxLength = 160
description = "Supporting line under the headline"

[blocks.placeholders.ctaText]
type = "text"
required = true
maxLength = 30
defaultValue = "Get started"
description = "Call-to-action button label"

[blocks.placeholders.ctaLink]
type = "url"
defaultValue = "#contact"
description = "Call-to-action target"

[[blocks.variants]]
id = "hero-stats"
template = """
<section className="hero hero--stats">
  <h1>{headline}</h1>
  <p>{subheadline}</p>
  <ul className="hero__stats">{statItems}</ul>
  <a href="{ctaLink}">{ctaText}</a>
</section>
"""

[blocks.variants.placeholderOverrides.headline]
maxLength = 60

[blocks.variants.placeholderOverrides.statItems]
type = "list"
required = true
description = "Three short metric statements"

[[blocks.variants]]
id = "hero-split"
template = """
<section className="hero hero--split">
  <div className="hero__copy">
    <h1>{headline}</h1>
    <p>{subheadline}</p>
    <a href="{ctaLink}">{ctaText}</a>
  </div>
  <img src="{heroImage}" alt="{headline}" />
</section>
"""

[blocks.variants.placeholderOverrides.heroImage]
type = "image"
required = true
description = "Large hero illustration or photo"

[[blocks]]
id = "menu-showcase"
category = "content"
baseTemplate = """
<section className="menu">
  <h2>{menuTitle}</h2>
  <div className="menu__items">{menuItems}</div>
</section>
"""

[blocks.placeholders.menuTitle]
type = "text"
required = true
maxLength = 50
defaultValue = "Our menu"
description = "Menu section heading"

[blocks.placeholders.menuItems]
type = "list"
required = true
description = "Dishes with name, description and price"

[[blocks.variants]]
id = "menu-grid"
template = """
<section className="menu menu--grid">
  <h2>{menuTitle}</h2>
  <div className="menu__grid">{menuItems}</div>
</section>
"""

[[blocks.variants]]
id = "menu-tabs"
template = """
<section className="menu menu--tabs">
  <h2>{menuTitle}</h2>
  <nav className="menu__tabs">{menuCategories}</nav>
  <div className="menu__panels">{menuItems}</div>
</section>
"""

[blocks.variants.placeholderOverrides.menuCategories]
type = "list"
required = true
description = "Tab labels grouping the menu"

[[blocks]]
id = "product-grid"
category = "content"
baseTemplate = """
<section className="products">
  <h2>{gridTitle}</h2>
  <div className="products__grid">{productCards}</div>
</section>
"""

[blocks.placeholders.gridTitle]
type = "text"
maxLength = 50
defaultValue = "Featured products"
description = "Product section heading"

[blocks.placeholders.productCards]
type = "list"
required = true
description = "Product cards with image, name and price"

[[blocks]]
id = "testimonials"
category = "content"
baseTemplate = """
<section className="testimonials">
  <h2>{testimonialsTitle}</h2>
  <div className="testimonials__quotes">{quotes}</div>
</section>
"""

[blocks.placeholders.testimonialsTitle]
type = "text"
maxLength = 50
defaultValue = "What people say"
description = "Testimonials heading"

[blocks.placeholders.quotes]
type = "list"
required = true
description = "Customer quotes with attribution"

[[blocks]]
id = "gallery"
category = "content"
baseTemplate = """
<section className="gallery">
  <h2>{galleryTitle}</h2>
  <div className="gallery__grid">{galleryImages}</div>
</section>
"""

[blocks.placeholders.galleryTitle]
type = "text"
maxLength = 50
description = "Gallery heading"

[blocks.placeholders.galleryImages]
type = "list"
required = true
description = "Image references with alt text"

[[blocks]]
id = "about-section"
category = "content"
baseTemplate = """
<section className="about">
  <h2>{aboutTitle}</h2>
  <p>{aboutBody}</p>
</section>
"""

[blocks.placeholders.aboutTitle]
type = "text"
maxLength = 50
defaultValue = "About us"
description = "About section heading"

[blocks.placeholders.aboutBody]
type = "textarea"
required = true
maxLength = 600
description = "Story of the business"

[[blocks]]
id = "contact-form"
category = "content"
baseTemplate = """
<section className="contact">
  <h2>{contactTitle}</h2>
  <form action="{formEndpoint}">{formFields}</form>
</section>
"""

[blocks.placeholders.contactTitle]
type = "text"
maxLength = 50
defaultValue = "Get in touch"
description = "Contact section heading"

[blocks.placeholders.formEndpoint]
type = "url"
defaultValue = "/api/contact"
description = "Form submission endpoint"

[blocks.placeholders.formFields]
type = "list"
description = "Form field definitions"

[[blocks]]
id = "cta-banner"
category = "content"
baseTemplate = """
<section className="cta">
  <h2>{ctaHeadline}</h2>
  <a href="{ctaLink}">{ctaText}</a>
</section>
"""

[blocks.placeholders.ctaHeadline]
type = "text"
required = true
maxLength = 70
description = "Banner headline"

[blocks.placeholders.ctaText]
type = "text"
required = true
maxLength = 30
defaultValue = "Contact us"
description = "Banner button label"

[blocks.placeholders.ctaLink]
type = "url"
defaultValue = "#contact"
description = "Banner button target"

[[blocks]]
id = "footer"
category = "footer"
baseTemplate = """
<footer className="footer">
  <p>{footerText}</p>
  <nav>{footerLinks}</nav>
</footer>
"""

[blocks.placeholders.footerText]
type = "text"
maxLength = 120
description = "Copyright or tagline"

[blocks.placeholders.footerLinks]
type = "list"
description = "Footer navigation links"

[[blocks.variants]]
id = "footer-minimal"
template = """
<footer className="footer footer--minimal">
  <p>{footerText}</p>
</footer>
"""

[[blocks.variants]]
id = "footer-columns"
template = """
<footer className="footer footer--columns">
  <div className="footer__cols">{footerColumns}</div>
  <p>{footerText}</p>
</footer>
"""

[blocks.variants.placeholderOverrides.footerColumns]
type = "list"
required = true
description = "Link columns with headings"
"##;

/// Default business category manifests
const BUILTIN_CATEGORIES: &str = r##"
[[categories]]
id = "restaurant"
keywords = ["dining", "food", "menu", "reservation"]

[categories.globalSettings]
theme = "warm"
colorScheme = "terracotta"
typography = "serif-display"

[[categories.blockUsages]]
blockId = "hero"

[[categories.blockUsages]]
blockId = "menu-showcase"

[[categories.blockUsages]]
blockId = "testimonials"

[[categories.blockUsages]]
blockId = "gallery"
required = false

[[categories.blockUsages]]
blockId = "cta-banner"

[categories.blockUsages.customizations]
ctaText = "Book a table"

[[categories.blockUsages]]
blockId = "footer"
variantId = "footer-columns"

[categories.variantPools.hero]
allowedVariants = ["hero-stats", "hero-split"]
defaultVariant = "hero-stats"
randomSelection = false

[categories.variantPools.hero.constraints.hero-stats]
tone = ["modern", "bold"]
businessType = ["bistro", "fast-casual"]

[categories.variantPools.hero.constraints.hero-split]
tone = ["luxury", "elegant"]
businessType = ["fine-dining"]

[categories.variantPools.menu-showcase]
allowedVariants = ["menu-grid", "menu-tabs"]
randomSelection = true

[categories.overrides.hero.placeholders.subheadline]
required = true
description = "One line on cuisine and atmosphere"

[[categories]]
id = "ecommerce"
keywords = ["shop", "store", "products", "checkout"]

[categories.globalSettings]
theme = "clean"
colorScheme = "slate"

[[categories.blockUsages]]
blockId = "hero"
variantId = "hero-split"

[[categories.blockUsages]]
blockId = "product-grid"

[[categories.blockUsages]]
blockId = "testimonials"
required = false

[[categories.blockUsages]]
blockId = "cta-banner"

[[categories.blockUsages]]
blockId = "footer"

[categories.overrides.cta-banner]
template = """
<section className="cta cta--newsletter">
  <h2>{ctaHeadline}</h2>
  <form action="/api/newsletter">
    <input type="email" placeholder="{emailPlaceholder}" />
    <button>{ctaText}</button>
  </form>
</section>
"""

[categories.overrides.cta-banner.placeholders.emailPlaceholder]
type = "text"
maxLength = 40
defaultValue = "Your email"
description = "Email input placeholder text"

[[categories]]
id = "portfolio"
keywords = ["work", "projects", "creative", "studio"]

[categories.globalSettings]
theme = "minimal"
typography = "sans-grotesque"

[[categories.blockUsages]]
blockId = "hero"

[[categories.blockUsages]]
blockId = "gallery"

[[categories.blockUsages]]
blockId = "about-section"

[[categories.blockUsages]]
blockId = "contact-form"

[[categories.blockUsages]]
blockId = "footer"
variantId = "footer-minimal"

[categories.variantPools.hero]
allowedVariants = ["hero-split", "hero-stats"]
defaultVariant = "hero-split"

[categories.variantPools.hero.constraints.hero-split]
tone = ["minimal", "elegant"]

[categories.variantPools.hero.constraints.hero-stats]
tone = ["bold", "data-driven"]
"##;

impl BlockLibrary {
    /// The built-in block definitions
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_BLOCKS).expect("Built-in block catalog should be valid TOML")
    }
}

impl CategoryCatalog {
    /// The built-in category manifests
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_CATEGORIES)
            .expect("Built-in category catalog should be valid TOML")
    }
}
