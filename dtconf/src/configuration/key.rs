//! The closed set of recognized configuration options.
//!
//! Each option has a canonical dotted name; that name is the textual contract
//! between `.properties` files and code.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

macro_rules! configuration_keys {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)+) => {
        /// A recognized configuration option.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ConfigurationKey {
            $($(#[$doc])* $variant,)+
        }

        impl ConfigurationKey {
            /// Every option, in declaration order.
            pub const ALL: &'static [ConfigurationKey] = &[$(Self::$variant,)+];

            /// The canonical dotted name of this option.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

configuration_keys! {
    /// Enables JavaScript/CSS compression.
    MainCompressorEnable => "main.compressor.enable",
    /// Compressor implementation class.
    MainCompressorClass => "main.compressor.class",
    /// What gets compressed (ALL, JS, CSS).
    MainCompressorMode => "main.compressor.mode",
    /// Compressor munge flag.
    MainCompressorMunge => "main.compressor.munge",
    /// Compressor preserve-semicolons flag.
    MainCompressorPreserveSemi => "main.compressor.preservesemi",
    /// Compressor micro-optimization switch.
    MainCompressorDisableOpti => "main.compressor.disableopti",
    /// Enables asset aggregation.
    MainAggregatorEnable => "main.aggregator.enable",
    /// Aggregation mode.
    MainAggregatorMode => "main.aggregator.mode",
    /// Loads the plugin from a CDN.
    MainCdn => "main.cdn",
    /// CDN URL of the plugin script.
    MainCdnJs => "main.cdn.js",
    /// CDN URL of the plugin stylesheet.
    MainCdnCss => "main.cdn.css",
    /// Base package scanned for custom extensions.
    MainBasePackage => "main.base.package",
    /// Base URL used to build asset links.
    MainBaseUrl => "main.base.url",
    /// Serves assets without the servlet layer.
    MainStandalone => "main.standalone",
    /// Table information display.
    FeatureInfo => "feature.info",
    /// Automatic column width.
    FeatureAutoWidth => "feature.autowidth",
    /// Global filtering.
    FeatureFilter => "feature.filter",
    /// Placement of per-column filters.
    FeatureFilterPlaceholder => "feature.filterplaceholder",
    /// Page length selector.
    FeatureLengthChange => "feature.lengthchange",
    /// Pagination.
    FeaturePaginate => "feature.paginate",
    /// Pagination widget type.
    FeaturePaginationType => "feature.paginationtype",
    /// Column sorting.
    FeatureSort => "feature.sort",
    /// Processing indicator.
    FeatureProcessing => "feature.processing",
    /// Deferred row rendering.
    FeatureDeferRender => "feature.deferrender",
    /// State saving.
    FeatureStateSave => "feature.statesave",
    /// jQuery UI theming.
    FeatureJqueryUi => "feature.jqueryui",
    /// Entries of the page length selector.
    FeatureLengthMenu => "feature.lengthmenu",
    /// Initial page length.
    FeatureDisplayLength => "feature.displaylength",
    /// DOM positioning string.
    FeatureDom => "feature.dom",
    /// Vertical scrolling height.
    FeatureScrollY => "feature.scrolly",
    /// Collapse the table when fewer rows than the scroll height.
    FeatureScrollCollapse => "feature.scrollcollapse",
    /// Horizontal scrolling width.
    FeatureScrollX => "feature.scrollx",
    /// Inner width for horizontal scrolling.
    FeatureScrollXInner => "feature.scrollxinner",
    /// Appearance effect.
    FeatureAppear => "feature.appear",
    /// Appearance effect duration.
    FeatureAppearDuration => "feature.appearduration",
    /// CSS class of the table element.
    CssClass => "css.class",
    /// Inline style of the table element.
    CssStyle => "css.style",
    /// Classes applied to alternate rows.
    CssStripeClasses => "css.stripeclasses",
    /// Theme name.
    CssTheme => "css.theme",
    /// Theme option.
    CssThemeOption => "css.themeoption",
    /// Renders rows client-side from the Ajax source.
    AjaxAutoRender => "ajax.autorender",
    /// Server-side processing.
    AjaxServerSide => "ajax.serverside",
    /// Request pipelining.
    AjaxPipelining => "ajax.pipelining",
    /// Number of pages fetched per pipelined request.
    AjaxPipeSize => "ajax.pipesize",
    /// Ajax data source URL.
    AjaxSource => "ajax.source",
    /// Custom server data function.
    AjaxServerData => "ajax.serverdata",
    /// Custom server parameter function.
    AjaxServerParam => "ajax.serverparam",
    /// HTTP method of Ajax requests.
    AjaxServerMethod => "ajax.servermethod",
    /// Selector of the element that reloads the table.
    AjaxReloadSelector => "ajax.reloadselector",
    /// Function called on reload.
    AjaxReloadFunction => "ajax.reloadfunction",
    /// Position of the fixed header.
    PluginFixedPosition => "plugin.fixedposition",
    /// Top offset of the fixed header.
    PluginFixedOffsetTop => "plugin.fixedoffsettop",
    /// Fixed header plugin.
    PluginFixedHeader => "plugin.fixedheader",
    /// Scroller plugin.
    PluginScroller => "plugin.scroller",
    /// Column reordering plugin.
    PluginColReorder => "plugin.colreorder",
    /// Enabled export formats.
    ExportTypes => "export.types",
    /// Positions of export links.
    ExportLinks => "export.links",
    /// Default CSV export implementation.
    ExportCsvDefaultClass => "export.csv.default.class",
    /// Default XML export implementation.
    ExportXmlDefaultClass => "export.xml.default.class",
    /// Default XLS export implementation.
    ExportXlsDefaultClass => "export.xls.default.class",
    /// Default XLSX export implementation.
    ExportXlsxDefaultClass => "export.xlsx.default.class",
    /// Default PDF export implementation.
    ExportPdfDefaultClass => "export.pdf.default.class",
    /// Message resolver used for table labels.
    InternalMessageResolver => "internal.messageresolver",
    /// Processing message.
    I18nMsgProcessing => "i18n.msg.processing",
    /// Search label.
    I18nMsgSearch => "i18n.msg.search",
    /// Page length label.
    I18nMsgLengthMenu => "i18n.msg.lengthmenu",
    /// Information line.
    I18nMsgInfo => "i18n.msg.info",
    /// Information line for an empty table.
    I18nMsgInfoEmpty => "i18n.msg.infoempty",
    /// Information suffix when filtered.
    I18nMsgInfoFiltered => "i18n.msg.infofiltered",
    /// Text appended to the information line.
    I18nMsgInfoPostfix => "i18n.msg.infopostfix",
    /// Loading message.
    I18nMsgLoadingRecords => "i18n.msg.loadingrecords",
    /// Message when filtering matches nothing.
    I18nMsgZeroRecords => "i18n.msg.zerorecords",
    /// Message for a table without data.
    I18nMsgEmptyTable => "i18n.msg.emptytable",
    /// "First" pagination label.
    I18nMsgPaginateFirst => "i18n.msg.paginate.first",
    /// "Previous" pagination label.
    I18nMsgPaginatePrevious => "i18n.msg.paginate.previous",
    /// "Next" pagination label.
    I18nMsgPaginateNext => "i18n.msg.paginate.next",
    /// "Last" pagination label.
    I18nMsgPaginateLast => "i18n.msg.paginate.last",
    /// Accessible label for ascending sort.
    I18nMsgAriaSortAscending => "i18n.msg.aria.sortascending",
    /// Accessible label for descending sort.
    I18nMsgAriaSortDescending => "i18n.msg.aria.sortdescending",
}

impl ConfigurationKey {
    /// Looks up an option by its canonical name.
    ///
    /// The name index is built on first use.
    ///
    /// # Examples
    ///
    /// ```
    /// use dtconf::ConfigurationKey;
    ///
    /// assert_eq!(
    ///     ConfigurationKey::find_by_name("ajax.pipesize"),
    ///     Some(ConfigurationKey::AjaxPipeSize)
    /// );
    /// assert_eq!(ConfigurationKey::find_by_name("ajax.pipe.size"), None);
    /// ```
    #[must_use]
    pub fn find_by_name(name: &str) -> Option<Self> {
        static INDEX: OnceLock<HashMap<&'static str, ConfigurationKey>> = OnceLock::new();
        INDEX
            .get_or_init(|| Self::ALL.iter().map(|key| (key.name(), *key)).collect())
            .get(name)
            .copied()
    }

    /// The first segment of the canonical name (`main`, `feature`, `ajax`, ...).
    #[must_use]
    pub fn category(self) -> &'static str {
        let name = self.name();
        name.split('.').next().unwrap_or(name)
    }
}

impl fmt::Display for ConfigurationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for ConfigurationKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ConfigurationKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::find_by_name(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown configuration key '{name}'")))
    }
}
