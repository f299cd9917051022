use constcat::concat;

mod components;
mod sections;
mod variables;

pub use components::BASE_COMPONENTS;
pub use sections::SECTION_STYLES;
pub use variables::CSS_VARIABLES;

// global style bundle
pub const PORTFOLIO_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

html {
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  color: var(--text-primary);
  background-color: var(--background);
  line-height: 1.6;
  transition: background-color var(--transition-normal) var(--easing-standard),
              color var(--transition-normal) var(--easing-standard);
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    SECTION_STYLES,
r#"
/* Navigation */
.app-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 40;
  padding: var(--space-6) 0;
  background-color: transparent;
  transition: background-color var(--transition-slow) var(--easing-standard),
              padding var(--transition-slow) var(--easing-standard),
              box-shadow var(--transition-slow) var(--easing-standard);
}

.app-header.scrolled {
  padding: var(--space-3) 0;
  background-color: var(--surface);
  box-shadow: var(--shadow-sm);
}

.nav-container {
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.logo {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  color: var(--text-primary);
}

.logo .initial {
  color: var(--primary);
}

.nav-links {
  display: flex;
  align-items: center;
  gap: var(--space-8);
}

.nav-link {
  position: relative;
  padding: var(--space-2) 0;
  font-size: 0.875rem;
  letter-spacing: 0.03em;
  color: var(--text-secondary);
  transition: color var(--transition-normal) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text-primary);
  text-decoration: none;
}

.nav-link.active {
  color: var(--text-primary);
  font-weight: 500;
}

.nav-link.active::after {
  content: "";
  position: absolute;
  left: 0;
  bottom: -4px;
  width: 100%;
  height: 1px;
  background-color: var(--primary);
}

.menu-button,
.theme-toggle {
  background: none;
  border: none;
  cursor: pointer;
  color: var(--text-primary);
  font-size: 1.25rem;
}

.menu-button {
  display: none;
}

.mobile-nav {
  display: none;
}

@media (max-width: 768px) {
  .nav-links .nav-link {
    display: none;
  }

  .menu-button {
    display: block;
  }

  .mobile-nav {
    display: flex;
    flex-direction: column;
    gap: var(--space-6);
    padding: var(--space-6);
    background-color: var(--surface);
    box-shadow: var(--shadow-md);
  }

  .mobile-nav .nav-link {
    padding-left: var(--space-4);
  }

  .mobile-nav .nav-link.active {
    border-left: 2px solid var(--primary);
  }

  .mobile-nav .nav-link.active::after {
    display: none;
  }
}
"#
);
