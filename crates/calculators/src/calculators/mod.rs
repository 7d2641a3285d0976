//! One module per calculator, grouped as on the site

// Coins & currency
pub mod coins_to_diamonds;
pub mod coins_to_usd;
pub mod diamonds_to_currency;
pub mod live_gift_earnings;

// Earnings
pub mod ad_revenue;
pub mod affiliate_earnings;
pub mod creator_fund;
pub mod creator_rewards;
pub mod monthly_earnings;
pub mod rpm;
pub mod shop_commission;
pub mod sponsorship_rate;
pub mod subscription_revenue;

// Engagement
pub mod completion_rate;
pub mod engagement_rate;
pub mod profile_conversion;
pub mod save_rate;
pub mod share_ratio;

// Advertising & business
pub mod ad_cost_metrics;
pub mod break_even;
pub mod cac;
pub mod campaign_roi;
pub mod content_calendar_roi;
pub mod conversion_rate;
pub mod cpm;
pub mod ltv;
pub mod niche_profitability;
pub mod product_margin;
pub mod sponsorship_roi;

// Growth
pub mod follower_growth;
pub mod follower_projection;

// Performance
pub mod video_performance;
pub mod viral_potential;
pub mod watch_time;

// Tax
pub mod creator_tax;

pub use ad_cost_metrics::AdCostMetrics;
pub use ad_revenue::AdRevenue;
pub use affiliate_earnings::AffiliateEarnings;
pub use break_even::BreakEven;
pub use cac::Cac;
pub use campaign_roi::CampaignRoi;
pub use coins_to_diamonds::CoinsToDiamonds;
pub use coins_to_usd::CoinsToUsd;
pub use completion_rate::CompletionRate;
pub use content_calendar_roi::ContentCalendarRoi;
pub use conversion_rate::ConversionRate;
pub use cpm::Cpm;
pub use creator_fund::CreatorFund;
pub use creator_rewards::CreatorRewards;
pub use creator_tax::CreatorTax;
pub use diamonds_to_currency::DiamondsToCurrency;
pub use engagement_rate::EngagementRate;
pub use follower_growth::FollowerGrowth;
pub use follower_projection::FollowerProjection;
pub use live_gift_earnings::LiveGiftEarnings;
pub use ltv::Ltv;
pub use monthly_earnings::MonthlyEarnings;
pub use niche_profitability::NicheProfitability;
pub use product_margin::ProductMargin;
pub use profile_conversion::ProfileConversion;
pub use rpm::Rpm;
pub use save_rate::SaveRate;
pub use share_ratio::ShareRatio;
pub use shop_commission::ShopCommission;
pub use sponsorship_rate::SponsorshipRate;
pub use sponsorship_roi::SponsorshipRoi;
pub use subscription_revenue::SubscriptionRevenue;
pub use video_performance::VideoPerformance;
pub use viral_potential::ViralPotential;
pub use watch_time::WatchTime;
