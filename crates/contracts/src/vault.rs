//! Yearn V2 vault interface definitions.
//!
//! Only the single-argument overloads of `deposit` and the no-argument
//! `withdraw` are declared; the harness always moves a depositor's full
//! position.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IYearnVault {
        // Setup
        function initialize(
            address token,
            address governance,
            address rewards,
            string nameOverride,
            string symbolOverride,
            address guardian
        ) external;
        function setDepositLimit(uint256 limit) external;
        function setManagement(address management) external;
        function setManagementFee(uint256 fee) external;
        function setPerformanceFee(uint256 fee) external;

        // Strategy bookkeeping
        function addStrategy(
            address strategy,
            uint256 debtRatio,
            uint256 minDebtPerHarvest,
            uint256 maxDebtPerHarvest,
            uint256 performanceFee
        ) external;
        function updateStrategyDebtRatio(address strategy, uint256 debtRatio) external;
        function revokeStrategy(address strategy) external;
        function removeStrategyFromQueue(address strategy) external;
        function withdrawalQueue(uint256 index) external view returns (address);
        function strategies(address strategy) external view returns (
            uint256 performanceFee,
            uint256 activation,
            uint256 debtRatio,
            uint256 minDebtPerHarvest,
            uint256 maxDebtPerHarvest,
            uint256 lastReport,
            uint256 totalDebt,
            uint256 totalGain,
            uint256 totalLoss
        );

        // Depositor flow
        function deposit(uint256 amount) external returns (uint256);
        function withdraw() external returns (uint256);

        // Views
        function token() external view returns (address);
        function totalAssets() external view returns (uint256);
        function pricePerShare() external view returns (uint256);
        function debtRatio() external view returns (uint256);
        function creditAvailable(address strategy) external view returns (uint256);
    }
}
