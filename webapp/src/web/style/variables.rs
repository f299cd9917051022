pub const CSS_VARIABLES: &str = r#"
:root {
  /* Color System */
  --primary: #A67F5D;          /* Terracotta accent */
  --primary-light: #C89C78;    /* Lighter accent for hover states */
  --primary-dark: #8C6A4C;     /* Darker accent for active states */
  --accent-soft: rgba(166, 127, 93, 0.1);
  --accent-line: rgba(166, 127, 93, 0.3);

  /* Neutrals */
  --neutral-50: #F9F6F0;       /* Paper */
  --neutral-100: #F7F7F7;
  --neutral-200: #EFEFEF;
  --neutral-300: #D4D4D4;
  --neutral-400: #C8BCB9;
  --neutral-500: #949494;      /* Stone */
  --neutral-700: #2C2C2C;      /* Charcoal */
  --neutral-900: #1C1C1C;

  /* Background and Surface Colors */
  --background: var(--neutral-100);
  --surface: #FFFFFF;
  --surface-muted: var(--neutral-50);
  --overlay: rgba(28, 28, 28, 0.8);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-500);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: rgba(166, 127, 93, 0.15);

  /* Typography */
  --font-serif: 'Playfair Display', 'Cormorant Garamond', Georgia, serif;
  --font-sans: 'Noto Sans', system-ui, sans-serif;
  --font-mono: 'IBM Plex Mono', monospace;

  /* Layout */
  --header-height: 72px;
  --container-width: 1200px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-5: 20px;
  --space-6: 24px;
  --space-8: 32px;
  --space-10: 40px;
  --space-12: 48px;
  --space-16: 64px;
  --space-24: 96px;

  /* Border Radius */
  --radius-sm: 2px;
  --radius-md: 4px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-md: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -1px rgba(0, 0, 0, 0.06);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --transition-slow: 500ms;
  --easing-standard: cubic-bezier(0.22, 1, 0.36, 1);
}

/* the theme toggle puts .dark on the document element */
:root.dark {
  --primary: #C89C78;
  --primary-light: #D8B394;
  --primary-dark: #9B755A;
  --accent-soft: rgba(200, 156, 120, 0.1);
  --accent-line: rgba(200, 156, 120, 0.3);

  --background: #1C1C1C;
  --surface: #242424;
  --surface-muted: #2A2A2A;
  --overlay: rgba(0, 0, 0, 0.85);

  --text-primary: #F7F7F7;
  --text-secondary: #A3A3A3;
  --text-inverse: #1C1C1C;

  --border: rgba(200, 156, 120, 0.15);
}"#;
