pub const SECTION_STYLES: &str = r#"
/* Page Section Styles */

/* General Layout */
.page {
  display: flex;
  flex-direction: column;
  min-height: 100vh;
}

.section {
  padding: var(--space-24) 0;
  scroll-margin-top: var(--header-height);
}

.section-header {
  max-width: 28rem;
  margin-bottom: var(--space-16);
}

.eyebrow {
  display: block;
  font-size: 0.875rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: var(--primary);
  margin-bottom: var(--space-3);
}

.section-title {
  font-family: var(--font-serif);
  font-size: 2.25rem;
  font-weight: 400;
  margin-bottom: var(--space-5);
  color: var(--text-primary);
}

.section-rule {
  width: 48px;
  height: 1px;
  background-color: var(--accent-line);
  margin: var(--space-5) 0;
}

.section-lead {
  color: var(--text-secondary);
  line-height: 1.7;
}

/* Hero Section */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: var(--header-height);
}

.hero-content {
  max-width: 720px;
}

.hero-title {
  font-family: var(--font-serif);
  font-size: 3.5rem;
  font-weight: 400;
  line-height: 1.1;
  margin-bottom: var(--space-6);
}

.hero-subtitle {
  font-size: 1.25rem;
  color: var(--text-secondary);
  margin-bottom: var(--space-10);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
  margin-bottom: var(--space-12);
}

.hero-skills {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3) var(--space-6);
  font-family: var(--font-mono);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.hero-location {
  margin-top: var(--space-8);
  font-size: 0.875rem;
  color: var(--text-secondary);
}

/* About Section */
.about-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: var(--space-16);
}

.about-bio {
  font-size: 1.125rem;
  font-weight: 500;
  margin-bottom: var(--space-8);
}

.about-block {
  margin-bottom: var(--space-10);
}

.about-block h3 {
  font-family: var(--font-serif);
  font-size: 1.125rem;
  font-weight: 400;
  padding-bottom: var(--space-2);
  margin-bottom: var(--space-5);
  border-bottom: 1px solid var(--border);
}

.about-entry {
  margin-bottom: var(--space-5);
}

.about-entry .heading {
  font-weight: 500;
}

.about-entry .meta {
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.tech-group {
  margin-bottom: var(--space-6);
}

.tech-group h4 {
  font-weight: 500;
  margin-bottom: var(--space-2);
}

/* Projects Section */
.category-tabs {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-3) var(--space-8);
  margin-bottom: var(--space-16);
}

.category-tab {
  position: relative;
  padding: var(--space-2) var(--space-4);
  font-family: var(--font-sans);
  font-size: 0.875rem;
  color: var(--text-secondary);
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  cursor: pointer;
  transition: color var(--transition-normal) var(--easing-standard),
              background-color var(--transition-normal) var(--easing-standard);
}

.category-tab:hover {
  color: var(--text-primary);
  background-color: var(--accent-soft);
}

.category-tab.active {
  color: var(--primary);
  font-weight: 500;
  background-color: var(--accent-soft);
  border-bottom-color: var(--primary);
}

.project-count {
  margin-top: var(--space-16);
  padding-top: var(--space-8);
  text-align: right;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.2em;
  color: var(--text-secondary);
}

/* Contact Section */
.contact-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
  gap: var(--space-12);
}

.contact-item {
  margin-bottom: var(--space-6);
}

.contact-item h4 {
  font-weight: 500;
  margin-bottom: var(--space-1);
}

.social-links {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-4);
}

/* Footer */
.site-footer {
  padding: var(--space-12) 0;
  border-top: 1px solid var(--border);
  background-color: var(--surface-muted);
  color: var(--text-secondary);
}

.site-footer .container {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: var(--space-8);
}

.site-footer .name {
  font-family: var(--font-serif);
  font-size: 1.25rem;
  color: var(--text-primary);
}

@media (max-width: 768px) {
  .hero-title {
    font-size: 2.5rem;
  }

  .section {
    padding: var(--space-16) 0;
  }
}
"#;
