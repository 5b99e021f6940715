//! Clonable Velodrome/Aerodrome strategy interface definitions.

use alloy::sol;

sol! {
    /// One hop of a Velodrome router swap path.
    struct Route {
        address from;
        address to;
        bool stable;
        address factory;
    }

    #[sol(rpc)]
    interface IVelodromeStrategy {
        event Harvested(uint256 profit, uint256 loss, uint256 debtPayment, uint256 debtOutstanding);

        // Lifecycle
        function initialize(
            address vault,
            address strategist,
            address rewards,
            address keeper,
            address gauge,
            Route[] swapRouteForToken0,
            Route[] swapRouteForToken1
        ) external;
        function cloneStrategyVelodrome(
            address vault,
            address strategist,
            address rewards,
            address keeper,
            address gauge,
            Route[] swapRouteForToken0,
            Route[] swapRouteForToken1
        ) external returns (address newStrategy);
        function harvest() external;

        // Keeper configuration
        function setKeeper(address keeper) external;
        function setCreditThreshold(uint256 creditThreshold) external;
        function setForceHarvestTriggerOnce(bool forceHarvestTriggerOnce) external;
        function setHarvestTriggerParams(uint256 harvestProfitMinInUsdc, uint256 harvestProfitMaxInUsdc) external;
        function setMaxReportDelay(uint256 delay) external;
        function setBaseFeeOracle(address baseFeeOracle) external;
        function setSwapRoutes(
            Route[] swapRouteForToken0,
            Route[] swapRouteForToken1,
            bool useFeeOnTransfer
        ) external;

        // Views
        function harvestTrigger(uint256 callCostInWei) external view returns (bool);
        function isBaseFeeAcceptable() external view returns (bool);
        function claimableProfitInUsdc() external view returns (uint256);
        function estimatedTotalAssets() external view returns (uint256);
    }
}
